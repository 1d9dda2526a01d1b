//! Configuration System
//!
//! Small env-overridable configuration: an optional TOML file in the user
//! config directory supplies defaults for the external tool, the picker,
//! and the highlight colors; environment variables take precedence.

use crate::error::CtxError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Overrides the state-file directory.
pub const ENV_CACHE_DIR: &str = "CCTX_CACHE_DIR";
/// Forces current-context highlighting even when stdout is not a terminal.
pub const ENV_FORCE_COLOR: &str = "CCTX_FORCE_COLOR";
/// Conventional color suppression switch.
pub const ENV_NO_COLOR: &str = "NO_COLOR";
/// Opts out of interactive selection entirely.
pub const ENV_IGNORE_PICKER: &str = "CCTX_IGNORE_PICKER";
/// Foreground color for the current context in listings.
pub const ENV_CURRENT_FG: &str = "CCTX_CURRENT_FGCOLOR";
/// Background color for the current context in listings.
pub const ENV_CURRENT_BG: &str = "CCTX_CURRENT_BGCOLOR";
/// External cluster-config tool binary.
pub const ENV_TOOL: &str = "CCTX_TOOL";
/// Interactive picker binary.
pub const ENV_PICKER: &str = "CCTX_PICKER";
/// Tracing filter directives (same syntax as RUST_LOG).
pub const ENV_LOG: &str = "CCTX_LOG";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CctxConfig {
    /// External cluster-config tool binary name
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Interactive picker binary name
    #[serde(default = "default_picker")]
    pub picker: String,

    /// Foreground color for the current context in listings
    #[serde(default = "default_current_fg")]
    pub current_fg: String,

    /// Background color for the current context in listings (empty = none)
    #[serde(default)]
    pub current_bg: String,
}

fn default_tool() -> String {
    "kubectl".to_string()
}

fn default_picker() -> String {
    "fzf".to_string()
}

fn default_current_fg() -> String {
    "yellow".to_string()
}

impl Default for CctxConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            picker: default_picker(),
            current_fg: default_current_fg(),
            current_bg: String::new(),
        }
    }
}

impl CctxConfig {
    /// Load configuration from the config file (if present) with environment
    /// overrides applied on top. A missing file is not an error; a malformed
    /// one is.
    pub fn load() -> Result<Self, CtxError> {
        let mut config = match config_file_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    CtxError::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                toml::from_str(&content).map_err(|e| {
                    CtxError::Config(format!("Failed to parse {}: {}", path.display(), e))
                })?
            }
            _ => Self::default(),
        };

        if let Some(tool) = non_empty_env(ENV_TOOL) {
            config.tool = tool;
        }
        if let Some(picker) = non_empty_env(ENV_PICKER) {
            config.picker = picker;
        }
        if let Some(fg) = non_empty_env(ENV_CURRENT_FG) {
            config.current_fg = fg;
        }
        if let Some(bg) = non_empty_env(ENV_CURRENT_BG) {
            config.current_bg = bg;
        }

        Ok(config)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Path of the optional configuration file.
pub fn config_file_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cctx").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Directory holding the local switch-state record.
///
/// `CCTX_CACHE_DIR` overrides the platform cache location.
pub fn cache_dir() -> Result<PathBuf, CtxError> {
    if let Some(dir) = non_empty_env(ENV_CACHE_DIR) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "cctx")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .ok_or_else(|| CtxError::Config("Unable to determine a cache directory".to_string()))
}
