// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{self, BudgetStatus};
use crate::models::{Budget, BudgetPeriod};
use crate::state::AppState;
use crate::utils::{clamp_percent, fmt_money, fmt_percent, maybe_print_json, pretty_table};

pub fn handle(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = query_rows(state, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        println!(
            "{}",
            pretty_table(
                &["Category", "Period", "Spent", "Limit", "Used", "Status"],
                table_rows(&rows, &state.settings.currency_symbol),
            )
        );
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetRow {
    pub category: String,
    pub period: BudgetPeriod,
    pub spent: Decimal,
    pub limit: Decimal,
    pub utilization: Decimal,
    /// Utilization clamped for progress bars.
    pub bar: Decimal,
    pub status: BudgetStatus,
}

impl BudgetRow {
    pub fn new(budget: &Budget) -> Self {
        let utilization = aggregate::budget_utilization(budget);
        Self {
            category: budget.category.clone(),
            period: budget.period,
            spent: budget.spent,
            limit: budget.limit,
            utilization,
            bar: clamp_percent(utilization),
            status: BudgetStatus::classify(utilization),
        }
    }
}

pub fn query_rows(state: &AppState, sub: &clap::ArgMatches) -> Result<Vec<BudgetRow>> {
    let scope = state.resolve_tab(sub)?;
    Ok(rows_for_tab(state, &scope.id, sub.get_flag("derive-spent")))
}

/// Budget rows, with `spent` taken from the budgets as stored unless `derive`
/// asks for it to be summed from the tab's transactions.
pub fn rows_for_tab(state: &AppState, scope_id: &str, derive: bool) -> Vec<BudgetRow> {
    let reference = state.reference();
    state
        .store
        .budgets()
        .iter()
        .map(|b| {
            if derive {
                let derived = aggregate::with_derived_spent(
                    b,
                    state.store.transactions(),
                    scope_id,
                    &reference,
                );
                BudgetRow::new(&derived)
            } else {
                BudgetRow::new(b)
            }
        })
        .collect()
}

pub fn table_rows(rows: &[BudgetRow], symbol: &str) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            vec![
                r.category.clone(),
                r.period.to_string(),
                fmt_money(&r.spent, symbol),
                fmt_money(&r.limit, symbol),
                fmt_percent(&r.utilization),
                r.status.as_str().to_string(),
            ]
        })
        .collect()
}
