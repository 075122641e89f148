// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod tabs;
pub mod dashboard;
pub mod transactions;
pub mod analytics;
pub mod budgets;
pub mod goals;
pub mod exporter;
pub mod shell;

use anyhow::Result;
use tracing::debug;

use crate::state::AppState;

pub fn dispatch(state: &mut AppState, matches: &clap::ArgMatches) -> Result<()> {
    debug!(command = matches.subcommand_name().unwrap_or(""), "dispatch");
    match matches.subcommand() {
        Some(("tabs", sub)) => tabs::handle(state, sub)?,
        Some(("dashboard", sub)) => dashboard::handle(state, sub)?,
        Some(("tx", sub)) => transactions::handle(state, sub)?,
        Some(("analytics", sub)) => analytics::handle(state, sub)?,
        Some(("budgets", sub)) => budgets::handle(state, sub)?,
        Some(("goals", sub)) => goals::handle(state, sub)?,
        Some(("export", sub)) => exporter::handle(state, sub)?,
        _ => {}
    }
    Ok(())
}
