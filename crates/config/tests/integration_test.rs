//! Integration tests for loading and validating the process environment.
//!
//! These tests drive the public API end to end against the real process
//! environment, the way application startup code would use it.
//!
//! Invariants:
//! - Every test that touches the process environment is `#[serial]` and
//!   scoped with `temp_env` so variables are restored afterwards.
//! - Variable names are prefixed with `_ENVKIT_IT_` to avoid clashing with the host.

use envkit::{EnvError, EnvManager, EnvParser, Value, VarSpec};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_env_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Startup flow: load a file, declare a prefixed schema, parse it.
#[test]
#[serial]
fn test_startup_flow_against_process_env() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(
        &temp_dir,
        ".env",
        "# service settings\n\
         _ENVKIT_IT_NAME=myapp\n\
         _ENVKIT_IT_DEBUG=true\n\
         _ENVKIT_IT_HOSTS=\"a.local, b.local\"\n",
    );

    temp_env::with_vars(
        [
            ("_ENVKIT_IT_NAME", None),
            ("_ENVKIT_IT_DEBUG", None),
            ("_ENVKIT_IT_HOSTS", None),
            ("_ENVKIT_IT_PORT", Some("8080")),
        ],
        || {
            let mut manager = EnvManager::new();
            manager.load_dotenv(&path, false).unwrap();
            manager
                .set_prefix("_envkit_it")
                .define(VarSpec::string("NAME").required())
                .define(VarSpec::bool("DEBUG").default(false))
                .define(VarSpec::int("PORT").default(3000))
                .define(VarSpec::list("HOSTS"))
                .define(VarSpec::float("RATIO").default(0.5));

            let parsed = manager.parse().unwrap();

            assert_eq!(parsed.get_str("NAME"), Some("myapp"));
            assert_eq!(parsed.get_bool("DEBUG"), Some(true));
            assert_eq!(parsed.get_int("PORT"), Some(8080));
            assert_eq!(
                parsed.get_list("HOSTS"),
                Some(&["a.local".to_string(), "b.local".to_string()][..])
            );
            assert_eq!(parsed.get_float("RATIO"), Some(0.5));
        },
    );
}

#[test]
#[serial]
fn test_second_load_without_override_keeps_first_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(&temp_dir, ".env", "_ENVKIT_IT_STAGE=one\n");

    temp_env::with_var_unset("_ENVKIT_IT_STAGE", || {
        let mut manager = EnvManager::new();
        manager.load_dotenv(&path, false).unwrap();
        fs::write(&path, "_ENVKIT_IT_STAGE=two\n").unwrap();
        manager.load_dotenv(&path, false).unwrap();

        assert_eq!(manager.get("_ENVKIT_IT_STAGE").as_deref(), Some("one"));

        manager.load_dotenv(&path, true).unwrap();
        assert_eq!(manager.get("_ENVKIT_IT_STAGE").as_deref(), Some("two"));
    });
}

#[test]
#[serial]
fn test_interpolation_sees_preexisting_process_vars() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_env_file(
        &temp_dir,
        ".env",
        "_ENVKIT_IT_URL=https://${_ENVKIT_IT_HOST}:$_ENVKIT_IT_HTTPS_PORT/api\n",
    );

    temp_env::with_vars(
        [
            ("_ENVKIT_IT_HOST", Some("example.org")),
            ("_ENVKIT_IT_HTTPS_PORT", Some("8443")),
            ("_ENVKIT_IT_URL", None),
        ],
        || {
            let loaded = envkit::load_dotenv(&path, false).unwrap();

            assert_eq!(loaded["_ENVKIT_IT_URL"], "https://example.org:8443/api");
            assert_eq!(
                envkit::get("_ENVKIT_IT_URL").as_deref(),
                Some("https://example.org:8443/api")
            );
        },
    );
}

#[test]
#[serial]
fn test_require_names_every_missing_variable() {
    temp_env::with_vars(
        [
            ("_ENVKIT_IT_A", Some("1")),
            ("_ENVKIT_IT_B", None),
            ("_ENVKIT_IT_C", None),
        ],
        || {
            let manager = EnvManager::new();

            match manager.require(&["_ENVKIT_IT_A", "_ENVKIT_IT_B", "_ENVKIT_IT_C"]) {
                Err(EnvError::MissingVars(names)) => {
                    assert_eq!(names, vec!["_ENVKIT_IT_B", "_ENVKIT_IT_C"]);
                }
                other => panic!("expected MissingVars, got {other:?}"),
            }
        },
    );
}

#[test]
#[serial]
fn test_require_returns_all_values_when_present() {
    temp_env::with_vars(
        [("_ENVKIT_IT_A", Some("1")), ("_ENVKIT_IT_B", Some("2"))],
        || {
            let found = EnvManager::new()
                .require(&["_ENVKIT_IT_A", "_ENVKIT_IT_B"])
                .unwrap();

            assert_eq!(found.len(), 2);
            assert_eq!(found["_ENVKIT_IT_A"], "1");
            assert_eq!(found["_ENVKIT_IT_B"], "2");
        },
    );
}

#[test]
#[serial]
fn test_dump_by_prefix_pattern() {
    temp_env::with_vars(
        [
            ("_ENVKIT_IT_DUMP_ONE", Some("1")),
            ("_ENVKIT_IT_DUMP_TWO", Some("2")),
            ("X_ENVKIT_IT_DUMP_THREE", Some("3")),
        ],
        || {
            let dumped = EnvManager::new()
                .dump(Some("_ENVKIT_IT_DUMP_"))
                .unwrap();

            assert_eq!(dumped.len(), 2);
            assert_eq!(dumped["_ENVKIT_IT_DUMP_ONE"], "1");
            assert!(!dumped.contains_key("X_ENVKIT_IT_DUMP_THREE"));
        },
    );
}

#[test]
#[serial]
fn test_parser_reads_process_env_by_default() {
    temp_env::with_vars(
        [
            ("_ENVKIT_IT_LEVEL", Some("WARN")),
            ("_ENVKIT_IT_FLAGS", Some("a=1,b=2")),
        ],
        || {
            let mut parser = EnvParser::new();
            parser
                .add(VarSpec::string("_ENVKIT_IT_LEVEL").choices(["INFO", "WARN"]))
                .add(VarSpec::map("_ENVKIT_IT_FLAGS"));

            let parsed = parser.parse().unwrap();

            assert_eq!(parsed.get_str("_ENVKIT_IT_LEVEL"), Some("WARN"));
            assert_eq!(parsed.get_map("_ENVKIT_IT_FLAGS").map(|m| m.len()), Some(2));
            assert_eq!(
                parser.get("_ENVKIT_IT_LEVEL"),
                Some(&Value::String("WARN".to_string()))
            );
        },
    );
}

#[test]
#[serial]
fn test_validation_error_lists_every_failure() {
    temp_env::with_vars(
        [
            ("_ENVKIT_IT_REQ_ONE", None::<&str>),
            ("_ENVKIT_IT_REQ_TWO", None),
        ],
        || {
            let mut manager = EnvManager::new();
            manager
                .define(VarSpec::string("_ENVKIT_IT_REQ_ONE").required())
                .define(VarSpec::string("_ENVKIT_IT_REQ_TWO").required());

            let err = manager.parse().unwrap_err();

            assert_eq!(err.errors().len(), 2);
            let message = err.to_string();
            assert!(message.contains("_ENVKIT_IT_REQ_ONE is required"));
            assert!(message.contains("_ENVKIT_IT_REQ_TWO is required"));
        },
    );
}

#[test]
#[serial]
fn test_saved_file_can_be_reloaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.env");

    temp_env::with_vars_unset(["_ENVKIT_IT_SAVED", "_ENVKIT_IT_SPACED"], || {
        let mut dotenv = envkit::DotEnv::new(&path);
        dotenv.set(envkit::ProcessEnv, "_ENVKIT_IT_SAVED", "value");
        dotenv.set(envkit::ProcessEnv, "_ENVKIT_IT_SPACED", "two words");
        dotenv.save().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "_ENVKIT_IT_SAVED=value\n_ENVKIT_IT_SPACED=\"two words\"\n"
        );

        let mut reloaded = envkit::DotEnv::new(&path);
        let loaded = reloaded.load(envkit::MemoryEnv::new(), false).unwrap();
        assert_eq!(&loaded, dotenv.vars());
    });
}
