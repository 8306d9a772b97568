//! Scaffold configuration (`aoc-scaffold.toml`).

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "aoc-scaffold.toml";

pub const DEFAULT_TEMPLATE: &str = "aoc_template";
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Name of the template directory copied by `setup`.
    pub template: String,
    /// Manifest path, relative to each solution directory.
    pub manifest: PathBuf,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let template = Path::new(&self.template);
        let mut components = template.components();
        let single_component = matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none();
        if self.template.is_empty() || !single_component {
            return Err(AppError::config_error(format!(
                "template must be a single directory name, got '{}'",
                self.template
            )));
        }

        if self.manifest.as_os_str().is_empty() {
            return Err(AppError::config_error("manifest path must not be empty"));
        }
        let inside_dir = self
            .manifest
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !inside_dir {
            return Err(AppError::config_error(format!(
                "manifest must be a relative path inside the solution directory, got '{}'",
                self.manifest.display()
            )));
        }

        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ScaffoldConfig, AppError> {
    let config: ScaffoldConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
