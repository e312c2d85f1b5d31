//! Configuration module for Kidari
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (KIDARI_*)
//! 3. Project config (./kidari.toml)
//! 4. User config (<config dir>/kidari/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{
    closest_match, levenshtein, parse_minutes, EnvExpectation, EnvVarValidator, MAX_ENV_MINUTES,
};
pub use loader::{
    ENV_COLOR, ENV_MIN_CONSECUTIVE, ENV_MIN_SESSION, KIDARI_CONFIG_DIR_VAR, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, OutputConfig};
