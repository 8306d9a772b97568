//! Configuration loading from the working directory.

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, CONFIG_FILE, ScaffoldConfig};
use crate::ports::ScaffoldStore;

/// Load `aoc-scaffold.toml` from the store root, falling back to defaults when absent.
pub fn load_config<S: ScaffoldStore>(store: &S) -> Result<ScaffoldConfig, AppError> {
    match store.read_root_file(CONFIG_FILE)? {
        Some(content) => parse_config_content(&content).map_err(|err| match err {
            AppError::TomlParse(inner) => {
                AppError::config_error(format!("{}: {}", CONFIG_FILE, inner.message()))
            }
            other => other,
        }),
        None => Ok(ScaffoldConfig::default()),
    }
}
