// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::state::AppState;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;

pub fn handle(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let selected = state.resolve_tab(sub)?.id.clone();
    let sym = &state.settings.currency_symbol;
    let rows = state
        .store
        .scopes()
        .iter()
        .map(|s| {
            vec![
                if s.id == selected { "*".into() } else { String::new() },
                s.id.clone(),
                format!("{} {}", s.icon, s.name),
                fmt_money(&s.cached_balance, sym),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["", "Id", "Tab", "Balance"], rows));
    Ok(())
}
