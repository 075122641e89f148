// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::{self, KindFilter};
use crate::catalog;
use crate::models::{Transaction, TransactionKind};
use crate::state::AppState;
use crate::utils::{fmt_day_label, fmt_money, maybe_print_json, pretty_table};
use crate::window::{Reference, Window};
use crate::wizard::AddTransactionWizard;

pub fn handle(state: &mut AppState, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(state, sub)?,
        Some(("add", sub)) => add(state, sub)?,
        Some(("categories", sub)) => categories(sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub kind: TransactionKind,
    pub category: String,
    pub comment: String,
    pub account: String,
    pub amount: Decimal,
}

impl TransactionRow {
    pub fn new(t: &Transaction, reference: &Reference) -> Self {
        let local = t.timestamp.with_timezone(&reference.offset);
        Self {
            id: t.id,
            date: local.format("%Y-%m-%d").to_string(),
            time: local.format("%H:%M").to_string(),
            kind: t.kind,
            category: t.category.clone(),
            comment: t.comment.clone().unwrap_or_default(),
            account: t.account.clone(),
            amount: t.amount,
        }
    }

    pub fn signed_amount(&self, symbol: &str) -> String {
        format!("{}{}", self.kind.sign(), fmt_money(&self.amount, symbol))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DayGroupRow {
    pub label: String,
    pub date: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub transactions: Vec<TransactionRow>,
}

pub fn query_groups(state: &AppState, sub: &clap::ArgMatches) -> Result<Vec<DayGroupRow>> {
    let scope = state.resolve_tab(sub)?;
    let filter = match sub.get_one::<String>("type") {
        Some(s) => s.parse::<KindFilter>()?,
        None => KindFilter::All,
    };
    let query = sub
        .get_one::<String>("search")
        .map(String::as_str)
        .unwrap_or("");
    let reference = state.reference();

    let scoped = aggregate::filter_by_scope(state.store.transactions(), &scope.id);
    let matched = aggregate::search(aggregate::filter_by_kind(scoped, filter), query);

    let groups = aggregate::group_by_calendar_day(matched, &reference)
        .into_iter()
        .map(|g| {
            let txs = g.transactions.iter().copied();
            DayGroupRow {
                label: fmt_day_label(&g.label, state.settings.locale),
                date: g.date.to_string(),
                income: aggregate::sum_by_kind_and_window(
                    txs.clone(),
                    TransactionKind::Income,
                    Window::All,
                    &reference,
                ),
                expense: aggregate::sum_by_kind_and_window(
                    txs,
                    TransactionKind::Expense,
                    Window::All,
                    &reference,
                ),
                transactions: g
                    .transactions
                    .iter()
                    .map(|t| TransactionRow::new(t, &reference))
                    .collect(),
            }
        })
        .collect();
    Ok(groups)
}

fn list(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let groups = query_groups(state, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &groups)? {
        return Ok(());
    }
    if groups.is_empty() {
        println!("No transactions found");
        return Ok(());
    }
    let sym = &state.settings.currency_symbol;
    for g in groups {
        println!(
            "{}  (+{} / -{})",
            g.label,
            fmt_money(&g.income, sym),
            fmt_money(&g.expense, sym)
        );
        let rows: Vec<Vec<String>> = g
            .transactions
            .iter()
            .map(|r| {
                vec![
                    r.time.clone(),
                    r.category.clone(),
                    r.comment.clone(),
                    r.account.clone(),
                    r.signed_amount(sym),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Time", "Category", "Comment", "Account", "Amount"], rows)
        );
    }
    Ok(())
}

fn add(state: &mut AppState, sub: &clap::ArgMatches) -> Result<()> {
    let tx = add_from_matches(state, sub)?;
    println!(
        "Recorded {}{} '{}' on {} (tab: {}, id: {})",
        tx.kind.sign(),
        fmt_money(&tx.amount, &state.settings.currency_symbol),
        tx.category,
        tx.account,
        tx.scope_id,
        tx.id
    );
    Ok(())
}

/// Walks the wizard with the values given on the command line and stores the
/// result.
pub fn add_from_matches(state: &mut AppState, sub: &clap::ArgMatches) -> Result<Transaction> {
    let scope_id = state.resolve_tab(sub)?.id.clone();
    let kind = sub.get_one::<String>("type").unwrap().parse::<TransactionKind>()?;

    let mut wizard = AddTransactionWizard::new(scope_id);
    wizard.set_kind(kind)?;
    wizard.set_amount(sub.get_one::<String>("amount").unwrap())?;
    wizard.advance()?;
    wizard.set_category(sub.get_one::<String>("category").unwrap())?;
    wizard.advance()?;
    if let Some(account) = sub.get_one::<String>("account") {
        wizard.set_account(account)?;
    }
    if let Some(comment) = sub.get_one::<String>("comment") {
        wizard.set_comment(comment)?;
    }
    let new = wizard.submit()?;

    let now = state.clock.now();
    let tx = state.store.add_transaction(new, now)?;
    Ok(tx.clone())
}

fn categories(sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub.get_one::<String>("type").unwrap().parse::<TransactionKind>()?;
    let rows = catalog::categories(kind)
        .iter()
        .map(|c| vec![c.label()])
        .collect();
    println!("{}", pretty_table(&["Category"], rows));
    let accounts = catalog::ACCOUNTS
        .iter()
        .map(|a| vec![a.to_string()])
        .collect();
    println!("{}", pretty_table(&["Account"], accounts));
    Ok(())
}
