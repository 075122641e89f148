// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use crate::aggregate;
use crate::models::Transaction;
use crate::state::AppState;

pub fn handle(state: &AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(state, sub),
        _ => Ok(()),
    }
}

fn export_transactions(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    // Oldest first, as a ledger reads
    let mut txs: Vec<&Transaction> = if sub.get_flag("all") {
        state.store.transactions().iter().collect()
    } else {
        let scope = state.resolve_tab(sub)?;
        aggregate::filter_by_scope(state.store.transactions(), &scope.id)
    };
    txs.reverse();

    let offset = state.reference().offset;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record([
                "id", "timestamp", "tab", "type", "amount", "category", "account", "comment",
            ])?;
            for t in &txs {
                wtr.write_record([
                    t.id.to_string(),
                    t.timestamp.with_timezone(&offset).to_rfc3339(),
                    t.scope_id.clone(),
                    t.kind.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.account.clone(),
                    t.comment.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "timestamp": t.timestamp.with_timezone(&offset).to_rfc3339(),
                        "tab": t.scope_id,
                        "type": t.kind,
                        "amount": t.amount,
                        "category": t.category,
                        "account": t.account,
                        "comment": t.comment,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
        other => {
            return Err(anyhow::anyhow!("Unknown format: {} (use csv|json)", other));
        }
    }
    info!(count = txs.len(), format = %fmt, path = %out, "transactions exported");
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
