use crate::actions::ActionInputs;
use crate::error::{AffectedBaseError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Returns the default main branch name.
fn default_main_branch_name() -> String {
    "main".to_string()
}

/// Configuration for base-commit resolution.
///
/// Values come from an optional repo-local `affected-base.toml`, overridden
/// by the action inputs when those are set.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_main_branch_name")]
    pub main_branch_name: String,

    /// Regex tested against a commit subject to recognize automated
    /// version-bump commits. Empty disables the adjustment.
    #[serde(default)]
    pub version_bump_commit_message_summary_matcher: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            main_branch_name: default_main_branch_name(),
            version_bump_commit_message_summary_matcher: String::new(),
        }
    }
}

impl Config {
    /// Apply action inputs over the file-loaded values
    pub fn apply_inputs(&mut self, inputs: &ActionInputs) {
        if let Some(name) = &inputs.main_branch_name {
            self.main_branch_name = name.clone();
        }
        if let Some(matcher) = &inputs.version_bump_commit_message_summary_matcher {
            self.version_bump_commit_message_summary_matcher = matcher.clone();
        }
    }

    /// Compile the version-bump matcher, treating the empty pattern as
    /// "adjustment disabled". An invalid pattern is fatal.
    pub fn compiled_bump_matcher(&self) -> Result<Option<Regex>> {
        let pattern = self.version_bump_commit_message_summary_matcher.trim();
        if pattern.is_empty() {
            return Ok(None);
        }

        Regex::new(pattern)
            .map(Some)
            .map_err(|e| AffectedBaseError::config(format!("Invalid version bump matcher: {}", e)))
    }
}

/// Load configuration from an explicit path, from `./affected-base.toml`
/// when present, or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./affected-base.toml").exists() {
        fs::read_to_string("./affected-base.toml")?
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| AffectedBaseError::config(format!("Cannot parse config: {}", e)))?;

    Ok(config)
}
