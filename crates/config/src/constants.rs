//! Centralized constants for the envkit crate.
//!
//! This module contains default values and literal tables shared by the
//! loader, the schema parser, and the facade.

// =============================================================================
// Variable File Defaults
// =============================================================================

/// Default path of the variable file loaded by `DotEnv::default()`.
pub const DEFAULT_DOTENV_PATH: &str = ".env";

/// Suffix appended to the variable file name while it is being written.
pub const SAVE_TEMP_SUFFIX: &str = ".tmp";

// =============================================================================
// Conversion
// =============================================================================

/// Raw values (compared case-insensitively) that convert to boolean `true`.
/// Anything else converts to `false`.
pub const TRUTHY_LITERALS: [&str; 4] = ["true", "1", "yes", "on"];

/// Separator between list elements and between map pairs.
pub const ITEM_SEPARATOR: char = ',';

/// Separator between a map key and its value.
pub const PAIR_SEPARATOR: char = '=';

// =============================================================================
// Error Rendering
// =============================================================================

/// Subject used in the aggregate validation error message.
pub const VALIDATION_SUBJECT: &str = "ENV";

/// Separator used to join individual validation failures.
pub const VALIDATION_JOINER: &str = "; ";
