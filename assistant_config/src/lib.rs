#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Configuration for the assistant binary.
//!
//! Stored as JSON at `~/assistant/config.json`. Every field has a default,
//! so a missing file or a partial one is always usable.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}

/// Interactive session texts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AssistantConfig {
    /// Printed once when the session starts.
    pub welcome: String,
    /// Printed before every input line.
    pub prompt: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            welcome: "Welcome to the assistant bot!".to_string(),
            prompt: "Enter a command: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set, e.g. `"warn"` or `"assistant_core=debug"`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// `~/assistant/config.json`.
    pub fn path() -> anyhow::Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(home_dir.join("assistant").join("config.json"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Write the default config file unless one already exists.
    pub fn create_config() -> anyhow::Result<()> {
        let path = Self::path()?;
        if Self::create_at(&path)? {
            println!("Created config at {}", path.display());
        } else {
            println!("Config already exists at {}", path.display());
        }
        Ok(())
    }

    /// Returns `false` without touching the file when `path` already exists.
    pub fn create_at(path: &Path) -> anyhow::Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&Self::default())?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        info!("Wrote default config to {}", path.display());
        Ok(true)
    }
}
