// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate;
use crate::commands::budgets::{self, BudgetRow};
use crate::commands::transactions::TransactionRow;
use crate::models::TransactionKind;
use crate::state::AppState;
use crate::utils::{clamp_percent, fmt_money, fmt_percent, pretty_table};
use crate::window::Window;

/// Budgets shown on the dashboard; the rest live under `budgets`.
const DASHBOARD_BUDGETS: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub tab_id: String,
    pub tab_name: String,
    pub icon: String,
    pub balance: Decimal,
    pub today_income: Decimal,
    pub today_expense: Decimal,
    pub month_income: Decimal,
    pub month_expense: Decimal,
    pub month_net: Decimal,
    /// Month expenses as a share of month income, clamped for the bar.
    pub expense_ratio: Decimal,
    pub budgets: Vec<BudgetRow>,
    pub recent: Vec<TransactionRow>,
}

pub fn build(state: &AppState, sub: &clap::ArgMatches) -> Result<DashboardView> {
    let scope = state.resolve_tab(sub)?;
    let reference = state.reference();
    let txs = aggregate::filter_by_scope(state.store.transactions(), &scope.id);
    let sum = |kind, window| {
        aggregate::sum_by_kind_and_window(txs.iter().copied(), kind, window, &reference)
    };

    let month_income = sum(TransactionKind::Income, Window::ThisMonth);
    let month_expense = sum(TransactionKind::Expense, Window::ThisMonth);
    let mut budgets = budgets::rows_for_tab(state, &scope.id, false);
    budgets.truncate(DASHBOARD_BUDGETS);

    Ok(DashboardView {
        tab_id: scope.id.clone(),
        tab_name: scope.name.clone(),
        icon: scope.icon.clone(),
        balance: scope.cached_balance,
        today_income: sum(TransactionKind::Income, Window::Today),
        today_expense: sum(TransactionKind::Expense, Window::Today),
        month_income,
        month_expense,
        month_net: aggregate::net_income(txs.iter().copied(), Window::ThisMonth, &reference),
        expense_ratio: clamp_percent(aggregate::expense_ratio(month_income, month_expense)),
        budgets,
        recent: aggregate::recent(txs.iter().copied(), state.settings.recent_limit)
            .into_iter()
            .map(|t| TransactionRow::new(t, &reference))
            .collect(),
    })
}

pub fn handle(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let view = build(state, sub)?;
    let sym = &state.settings.currency_symbol;

    println!("{} {} ({})", view.icon, view.tab_name, view.tab_id);
    println!("Balance: {}", fmt_money(&view.balance, sym));
    println!(
        "Today: +{} / -{}",
        fmt_money(&view.today_income, sym),
        fmt_money(&view.today_expense, sym)
    );
    println!(
        "This month: +{} / -{}  net {}  spent {} of income",
        fmt_money(&view.month_income, sym),
        fmt_money(&view.month_expense, sym),
        fmt_money(&view.month_net, sym),
        fmt_percent(&view.expense_ratio)
    );

    println!(
        "{}",
        pretty_table(
            &["Category", "Period", "Spent", "Limit", "Used", "Status"],
            budgets::table_rows(&view.budgets, sym),
        )
    );

    if view.recent.is_empty() {
        println!("No transactions yet");
    } else {
        let rows = view
            .recent
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.category.clone(),
                    r.comment.clone(),
                    r.account.clone(),
                    r.signed_amount(sym),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Category", "Comment", "Account", "Amount"], rows)
        );
    }
    Ok(())
}
