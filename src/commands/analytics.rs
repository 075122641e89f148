// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate;
use crate::commands::budgets::{self, BudgetRow};
use crate::models::TransactionKind;
use crate::state::AppState;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use crate::window::Window;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Decimal,
    pub share: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsView {
    pub tab_id: String,
    pub month_income: Decimal,
    pub month_expense: Decimal,
    pub net: Decimal,
    pub savings_rate: Decimal,
    pub average_daily_spend: Decimal,
    pub top_category: Option<String>,
    pub top_categories: Vec<CategoryRow>,
    pub budgets: Vec<BudgetRow>,
}

pub fn build(state: &AppState, sub: &clap::ArgMatches) -> Result<AnalyticsView> {
    let scope = state.resolve_tab(sub)?;
    let top_n = sub
        .get_one::<usize>("top")
        .copied()
        .unwrap_or(state.settings.top_categories);
    let reference = state.reference();

    let txs = aggregate::filter_by_scope(state.store.transactions(), &scope.id);
    let month_income = aggregate::sum_by_kind_and_window(
        txs.iter().copied(),
        TransactionKind::Income,
        Window::ThisMonth,
        &reference,
    );
    let month_expense = aggregate::sum_by_kind_and_window(
        txs.iter().copied(),
        TransactionKind::Expense,
        Window::ThisMonth,
        &reference,
    );

    let month_expenses: Vec<_> = txs
        .iter()
        .copied()
        .filter(|t| {
            t.kind == TransactionKind::Expense
                && Window::ThisMonth.contains(&t.timestamp, &reference)
        })
        .collect();
    let breakdown = aggregate::category_breakdown(month_expenses);
    let top = aggregate::top_categories(&breakdown, top_n);

    Ok(AnalyticsView {
        tab_id: scope.id.clone(),
        month_income,
        month_expense,
        net: aggregate::net_income(txs.iter().copied(), Window::ThisMonth, &reference),
        savings_rate: aggregate::savings_rate(month_income, month_expense),
        average_daily_spend: aggregate::average_daily_spend(month_expense),
        top_category: top.first().map(|(c, _)| c.clone()),
        top_categories: top
            .into_iter()
            .map(|(category, amount)| CategoryRow {
                share: aggregate::category_share(amount, month_expense),
                category,
                amount,
            })
            .collect(),
        budgets: budgets::rows_for_tab(state, &scope.id, sub.get_flag("derive-spent")),
    })
}

pub fn handle(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let view = build(state, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &view)? {
        return Ok(());
    }
    let sym = &state.settings.currency_symbol;

    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Net", "Savings rate"],
            vec![vec![
                fmt_money(&view.month_income, sym),
                fmt_money(&view.month_expense, sym),
                fmt_money(&view.net, sym),
                fmt_percent(&view.savings_rate),
            ]],
        )
    );

    let rows = view
        .top_categories
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_money(&c.amount, sym),
                fmt_percent(&c.share),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));

    println!(
        "{}",
        pretty_table(
            &["Category", "Period", "Spent", "Limit", "Used", "Status"],
            budgets::table_rows(&view.budgets, sym),
        )
    );

    println!(
        "Average daily spend: {}",
        fmt_money(&view.average_daily_spend, sym)
    );
    println!(
        "Most expensive category: {}",
        view.top_category.as_deref().unwrap_or("no data")
    );
    Ok(())
}
