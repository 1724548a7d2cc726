// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `NAVSTACK_*` environment variables.

use crate::history::DEFAULT_MAX_DEPTH;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides (`NAVSTACK_MAX_DEPTH`, ...)
pub const ENV_PREFIX: &str = "NAVSTACK";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of entries kept in a history stack
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Location of the per-user config file, if the platform has one
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "navstack")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from disk and environment
///
/// An explicit `path` must exist. The per-user default file is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let explicit = path.is_some();
    let file = path.map(Path::to_path_buf).or_else(default_path);

    let mut builder = config::Config::builder();
    if let Some(file) = &file {
        tracing::debug!("Reading configuration from {}", file.display());
        builder = builder.add_source(
            config::File::from(file.as_path())
                .format(config::FileFormat::Toml)
                .required(explicit),
        );
    }
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let settings = builder.build().with_context(|| match &file {
        Some(f) => format!("Failed to load configuration from {}", f.display()),
        None => "Failed to load configuration".to_string(),
    })?;

    settings
        .try_deserialize()
        .context("Failed to parse configuration")
}
