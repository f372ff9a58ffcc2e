//! Optional repo-level configuration.
//!
//! A `skillsmith.yaml` next to the skill folders can set a default archive
//! output directory and extend the packaging exclusion set. An absent file
//! means defaults; a malformed file is an error rather than a silent
//! fallback.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "skillsmith.yaml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default output directory for archives, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Extra exclusion patterns appended to the built-in set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Config {
    /// Load `dir/skillsmith.yaml`, or defaults when the file is absent.
    pub fn load(dir: &Path) -> Result<Config> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}
