//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{KidariError, KidariResult};

use super::env_validator::{closest_match, EnvVarValidator};
use super::types::{ColorMode, Config};

pub use crate::domain::value_objects::ConfigWarning;

/// Project config file, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "kidari.toml";

/// Overrides the platform config directory (used for test isolation).
pub const KIDARI_CONFIG_DIR_VAR: &str = "KIDARI_CONFIG_DIR";

pub const ENV_MIN_SESSION: &str = "KIDARI_MIN_SESSION_MINUTES";
pub const ENV_MIN_CONSECUTIVE: &str = "KIDARI_MIN_CONSECUTIVE_MINUTES";
pub const ENV_COLOR: &str = "KIDARI_COLOR";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> KidariResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| KidariError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config, else user config, else defaults; env overrides applied last.
pub fn discover(project_root: Option<&Path>) -> KidariResult<(Config, Vec<ConfigWarning>)> {
    let candidates = config_candidates(project_root, kidari_config_dir());

    for path in candidates {
        if path.is_file() {
            tracing::debug!(file = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    match discover(project_root) {
        Ok((config, _)) => config,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable config");
            with_env_overrides(Config::default())
        }
    }
}

/// Apply environment variable overrides (KIDARI_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

pub(crate) fn apply_env_overrides<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> Config {
    let policy = &mut config.policy;

    if let Some(value) = get_env(ENV_MIN_SESSION) {
        policy.min_session_minutes = EnvVarValidator::minutes(ENV_MIN_SESSION).minutes_or(
            &value,
            policy.min_session_minutes,
            writer,
        );
    }

    if let Some(value) = get_env(ENV_MIN_CONSECUTIVE) {
        policy.min_consecutive_minutes = EnvVarValidator::minutes(ENV_MIN_CONSECUTIVE)
            .minutes_or(&value, policy.min_consecutive_minutes, writer);
    }

    if let Some(value) = get_env(ENV_COLOR) {
        config.output.color = EnvVarValidator::keyword(ENV_COLOR, ColorMode::KEYWORDS)
            .keyword_or(&value, ColorMode::parse, config.output.color, writer);
    }

    config
}

/// Config file paths in precedence order
fn config_candidates(project_root: Option<&Path>, config_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = config_dir {
        candidates.push(dir.join("kidari").join("config.toml"));
    }
    candidates
}

/// Platform config directory, overridable for tests
fn kidari_config_dir() -> Option<PathBuf> {
    std::env::var(KIDARI_CONFIG_DIR_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "policy",
        "min_session_minutes",
        "min_consecutive_minutes",
        "output",
        "color",
        "unicode",
    ];

    closest_match(unknown, CANDIDATES)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
