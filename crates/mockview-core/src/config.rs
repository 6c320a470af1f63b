//! Configuration for verification runs
//!
//! Loaded from `mockview.toml` when present; every field has a default so
//! a zero-configuration run verifies a dev server on localhost:5173.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Result, VerifyError};

/// Verification run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Origin of the application under verification
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Directory receiving screenshots and the run report
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Run the browser in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Navigation timeout in seconds
    #[serde(default = "default_nav_timeout")]
    pub nav_timeout_secs: u64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_dir: default_output_dir(),
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            nav_timeout_secs: default_nav_timeout(),
        }
    }
}

impl VerifyConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| VerifyError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load from the given path if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Absolute URL for a path on the target origin
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

// Default value providers

fn default_base_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("verification")
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    720
}

fn default_nav_timeout() -> u64 {
    30
}
