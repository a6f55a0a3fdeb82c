//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Mask character used when no valid one is configured
pub const DEFAULT_PASSWORD_MASK: char = '*';

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "registration_tui=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("password mask must be exactly one character, got {0:?}")]
    InvalidPasswordMask(String),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Character shown in place of each password character while hidden
    pub password_mask: Option<String>,
    /// Tracing filter used when RUST_LOG is not set
    pub log_filter: Option<String>,
    /// Capture mouse events
    pub mouse_capture: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "registration", "registration-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Configured mask character, checked to be a single character
    pub fn try_password_mask(&self) -> Result<char, ConfigError> {
        match self.password_mask.as_deref() {
            None => Ok(DEFAULT_PASSWORD_MASK),
            Some(mask) => {
                let mut chars = mask.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(ConfigError::InvalidPasswordMask(mask.to_string())),
                }
            }
        }
    }

    /// Mask character, falling back to the default when misconfigured
    pub fn password_mask(&self) -> char {
        self.try_password_mask().unwrap_or_else(|err| {
            tracing::warn!("{err}; using {DEFAULT_PASSWORD_MASK:?}");
            DEFAULT_PASSWORD_MASK
        })
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(false)
    }
}
