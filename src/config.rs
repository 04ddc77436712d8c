//! Project configuration (roboicon.yaml).
//!
//! The config file is optional. When present it can move the output
//! directory and change the URL prefix used for manifest entries.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::generate::DEFAULT_OUTPUT_DIR;
use crate::manifest::DEFAULT_BASE;

/// Config file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "roboicon.yaml";

/// Project configuration loaded from roboicon.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output directory for the icons.
    pub output: PathBuf,

    /// URL prefix for manifest icon entries.
    pub base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base: DEFAULT_BASE.to_string(),
        }
    }
}

impl Config {
    /// Load config from a roboicon.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `roboicon.yaml` from `dir` if it exists.
    ///
    /// Returns the config and the file it came from, or defaults when no
    /// file is present.
    pub fn discover(dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Ok((Self::load(&path)?, Some(path)))
        } else {
            Ok((Self::default(), None))
        }
    }
}
