// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::FixedOffset;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::Locale;
use crate::window::parse_offset;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "FinTabs", "fintabs"));

/// Optional `fintabs.toml`. Every key has a default, so a partial file is
/// fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub default_tab: String,
    /// Timezone used for "today" and "this month", e.g. `+05:00`.
    pub utc_offset: String,
    pub locale: Locale,
    pub currency_symbol: String,
    pub recent_limit: usize,
    pub top_categories: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_tab: "personal".into(),
            utc_offset: "+05:00".into(),
            locale: Locale::En,
            currency_symbol: "₸".into(),
            recent_limit: 5,
            top_categories: 5,
        }
    }
}

impl Settings {
    pub fn offset(&self) -> Result<FixedOffset> {
        parse_offset(&self.utc_offset).context("Invalid utc_offset in configuration")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("fintabs.toml"))
}

pub fn parse(contents: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(contents).context("Failed to parse configuration")?;
    settings.offset()?;
    Ok(settings)
}

/// An explicit path must exist; the default location may be absent, in which
/// case defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (config_path()?, false),
    };
    if !path.exists() {
        if required {
            return Err(anyhow::anyhow!("Config file {} not found", path.display()));
        }
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Settings::default());
    }
    let contents =
        fs::read_to_string(&path).with_context(|| format!("Read config at {}", path.display()))?;
    let settings = parse(&contents).with_context(|| format!("Load config at {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(settings)
}
