//! Configuration module for tidyimports.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `TI_` and use double underscores
//! to separate nested levels:
//! - `TI_STYLE__INDENT_WIDTH=2` sets `style.indent_width`
//! - `TI_STYLE__WRAP_POLICY__THRESHOLD=80` sets `style.wrap_policy.threshold`
//! - `TI_DEBUG=true` sets `debug`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ImportError, ImportResult};
use crate::generation::StyleConfiguration;

const CONFIG_DIR: &str = ".tidyimports";
const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default)]
    pub debug: bool,

    /// Import rendering style
    #[serde(default)]
    pub style: StyleConfiguration,
}

fn default_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            style: StyleConfiguration::default(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path =
            Self::find_workspace_config().unwrap_or_else(Self::default_config_path);
        Self::figment(&config_path).extract().map_err(Box::new)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscores
            // stay inside field names
            .merge(Env::prefixed("TI_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Find the workspace config by looking for a .tidyimports directory
    /// from the current directory up to the root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(CONFIG_DIR))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join(CONFIG_FILE))
    }

    /// Reject values the generator cannot render sensibly
    pub fn validate(&self) -> ImportResult<()> {
        if self.style.wrap_policy.threshold == 0 {
            return Err(ImportError::ConfigError {
                reason: "style.wrap_policy.threshold must be at least 1".to_string(),
            });
        }
        if self.style.indent_width == 0 {
            return Err(ImportError::ConfigError {
                reason: "style.indent_width must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> ImportResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ImportError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| ImportError::ConfigError {
            reason: e.to_string(),
        })?;
        std::fs::write(path, toml_string).map_err(|source| ImportError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(dir: impl AsRef<Path>, force: bool) -> ImportResult<PathBuf> {
        let config_path = dir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err(ImportError::ConfigError {
                reason: format!(
                    "configuration file already exists at {}. Use --force to overwrite",
                    config_path.display()
                ),
            });
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ImportError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&config_path, SETTINGS_TEMPLATE).map_err(|source| {
            ImportError::FileWrite {
                path: config_path.clone(),
                source,
            }
        })?;

        Ok(config_path)
    }
}

const SETTINGS_TEMPLATE: &str = r#"# tidyimports configuration

# Version of the configuration schema
version = 1

# Global debug mode (same as --verbose)
debug = false

[style]
# Spaces used to indent wrapped named bindings
indent_width = 4

# Blank lines emitted after the last import group
blank_lines_after_all_groups = 0

# Quote around module specifiers: "single" or "double"
quote_style = "single"

# Comma after the last named binding: "none", "always" or "multi_line"
trailing_comma_policy = "none"

[style.wrap_policy]
# A statement stays on one line while its measure is strictly below this
threshold = 100

# "line_length", "words", "new_line_each_expression_after_count_limit"
# or "new_line_each_expression_after_count_limit_except_if_only_one"
mode = "line_length"

[style.spacing]
after_open_brace = 1
before_close_brace = 1
before_comma = 0
after_comma = 1
"#;
