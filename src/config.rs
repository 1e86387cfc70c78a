//! Session configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Settings for one graph session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Build a directed graph.
    pub directed: bool,
    /// Read a weight with every edge record.
    pub weighted: bool,
    /// Output format.
    pub format: OutputFormat,
    /// Stop all-paths enumeration after this many paths.
    pub max_paths: Option<usize>,
    /// Keep REPL history between sessions.
    pub history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            directed: false,
            weighted: false,
            format: OutputFormat::Text,
            max_paths: None,
            history: true,
        }
    }
}

impl SessionConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Decode from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> GraphResult<Self> {
        toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> GraphResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> GraphResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

/// REPL history file location.
pub fn history_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".gops_history")
}
