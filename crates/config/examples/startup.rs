//! Typical application startup: load `.env`, declare settings, validate them.
//!
//! Run with `RUST_LOG=envkit=debug` to see loader and parser diagnostics.

use anyhow::Context;
use envkit::{EnvManager, VarSpec};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let mut manager = EnvManager::new();
    manager
        .load_dotenv(".env", false)
        .context("Failed to load .env")?;

    manager.set("APP_DEBUG", "true");
    manager.set("APP_PORT", "8080");
    manager.set("APP_NAME", "myapp");

    manager
        .set_prefix("APP")
        .define(VarSpec::bool("DEBUG").default(false))
        .define(VarSpec::int("PORT").default(3000))
        .define(VarSpec::string("NAME").required())
        .define(
            VarSpec::string("LOG_LEVEL")
                .default("INFO")
                .choices(["DEBUG", "INFO", "WARN", "ERROR"]),
        );

    let config = manager.parse().context("Invalid configuration")?;
    println!("Config: {}", serde_json::to_string(&config)?);
    println!("Debug: {:?}", config.get_bool("DEBUG"));
    println!("Port: {:?}", config.get_int("PORT"));

    let app_vars = manager.dump(Some("APP_.*"))?;
    println!("All APP_* vars: {app_vars:?}");

    Ok(())
}
