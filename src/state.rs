// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::FixedOffset;

use crate::config::{self, Settings};
use crate::models::Scope;
use crate::store::Store;
use crate::window::{Clock, Reference, parse_timestamp};

/// Everything a command needs: the session's store, settings and clock.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub settings: Settings,
    pub clock: Clock,
    offset: FixedOffset,
}

impl AppState {
    /// Seeds a fresh store relative to the clock's current time.
    pub fn new(settings: Settings, clock: Clock) -> Result<Self> {
        let store = Store::seeded(clock.now());
        Self::with_store(store, settings, clock)
    }

    pub fn with_store(store: Store, settings: Settings, clock: Clock) -> Result<Self> {
        let offset = settings.offset()?;
        Ok(Self {
            store,
            settings,
            clock,
            offset,
        })
    }

    /// Reads `--config` and `--now` from top-level matches.
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let settings = config::load(m.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
        let clock = match m.get_one::<String>("now") {
            Some(s) => Clock::Fixed(parse_timestamp(s)?),
            None => Clock::System,
        };
        Self::new(settings, clock)
    }

    pub fn reference(&self) -> Reference {
        self.clock.reference(self.offset)
    }

    /// The tab named by `--tab`, or the configured default.
    pub fn resolve_tab(&self, m: &clap::ArgMatches) -> Result<&Scope> {
        let id = m
            .get_one::<String>("tab")
            .map(|s| s.trim())
            .unwrap_or(self.settings.default_tab.as_str());
        self.store.scope(id).with_context(|| {
            let known: Vec<&str> = self.store.scopes().iter().map(|s| s.id.as_str()).collect();
            format!("Tab '{}' not found (known: {})", id, known.join(", "))
        })
    }
}
