// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over the transaction log.
//!
//! Nothing here touches the store or the clock directly: every function takes
//! the log (or a slice of it) plus an explicit [`Reference`], and returns zero
//! or an empty collection for empty input. Percentages with a zero
//! denominator come back as `0`; use [`checked_percentage`] to tell the case
//! apart.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::DivisionUndefined;
use crate::models::{Budget, Goal, Transaction, TransactionKind};
use crate::window::{Reference, Window};

/// Days used when averaging a month of spending.
pub const DAYS_PER_MONTH: u32 = 30;

pub fn filter_by_scope<'a, I>(txs: I, scope_id: &str) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    txs.into_iter().filter(|t| t.scope_id == scope_id).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl KindFilter {
    pub fn matches(self, kind: TransactionKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == TransactionKind::Income,
            Self::Expense => kind == TransactionKind::Expense,
        }
    }
}

impl FromStr for KindFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(anyhow::anyhow!(
                "Invalid type filter '{}', expected all|income|expense",
                other
            )),
        }
    }
}

pub fn filter_by_kind<'a, I>(txs: I, filter: KindFilter) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    txs.into_iter().filter(|t| filter.matches(t.kind)).collect()
}

/// Case-insensitive substring match on category or comment. A blank query
/// keeps everything.
pub fn search<'a, I>(txs: I, query: &str) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let needle = query.trim().to_lowercase();
    txs.into_iter()
        .filter(|t| {
            needle.is_empty()
                || t.category.to_lowercase().contains(&needle)
                || t
                    .comment
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .collect()
}

/// First `n` entries of the log, which is most-recent-first.
pub fn recent<'a, I>(txs: I, n: usize) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    txs.into_iter().take(n).collect()
}

pub fn sum_by_kind_and_window<'a, I>(
    txs: I,
    kind: TransactionKind,
    window: Window,
    reference: &Reference,
) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    txs.into_iter()
        .filter(|t| t.kind == kind && window.contains(&t.timestamp, reference))
        .map(|t| t.amount)
        .sum()
}

pub fn net_income<'a, I>(txs: I, window: Window, reference: &Reference) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let (income, expense) = txs
        .into_iter()
        .filter(|t| window.contains(&t.timestamp, reference))
        .fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| match t.kind {
            TransactionKind::Income => (inc + t.amount, exp),
            TransactionKind::Expense => (inc, exp + t.amount),
        });
    income - expense
}

pub fn category_breakdown<'a, I>(txs: I) -> BTreeMap<String, Decimal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut breakdown = BTreeMap::new();
    for t in txs {
        *breakdown.entry(t.category.clone()).or_insert(Decimal::ZERO) += t.amount;
    }
    breakdown
}

/// Largest categories first; equal amounts are ordered by category name.
pub fn top_categories(breakdown: &BTreeMap<String, Decimal>, n: usize) -> Vec<(String, Decimal)> {
    let mut items: Vec<(String, Decimal)> = breakdown
        .iter()
        .map(|(c, a)| (c.clone(), *a))
        .collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items.truncate(n);
    items
}

pub fn checked_percentage(part: Decimal, whole: Decimal) -> Result<Decimal, DivisionUndefined> {
    if whole.is_zero() {
        return Err(DivisionUndefined);
    }
    part.checked_div(whole)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(DivisionUndefined)
}

/// `part / whole * 100`, or `0` when `whole` is zero.
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    checked_percentage(part, whole).unwrap_or(Decimal::ZERO)
}

/// Share of income that went to expenses.
pub fn expense_ratio(income: Decimal, expense: Decimal) -> Decimal {
    percentage(expense, income)
}

/// Share of income left after expenses. Negative when overspent.
pub fn savings_rate(income: Decimal, expense: Decimal) -> Decimal {
    percentage(income - expense, income)
}

pub fn category_share(amount: Decimal, total: Decimal) -> Decimal {
    percentage(amount, total)
}

pub fn average_daily_spend(month_expense: Decimal) -> Decimal {
    month_expense / Decimal::from(DAYS_PER_MONTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Normal,
    Warning,
    Danger,
}

impl BudgetStatus {
    pub fn classify(utilization: Decimal) -> Self {
        if utilization >= Decimal::ONE_HUNDRED {
            Self::Danger
        } else if utilization > Decimal::from(90) {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "ok",
            Self::Warning => "near limit",
            Self::Danger => "over limit",
        }
    }
}

pub fn budget_utilization(budget: &Budget) -> Decimal {
    percentage(budget.spent, budget.limit)
}

pub fn budget_status(budget: &Budget) -> BudgetStatus {
    BudgetStatus::classify(budget_utilization(budget))
}

/// Spending on the budget's category within its period, joined on the
/// category label.
pub fn derived_budget_spent<'a, I>(
    budget: &Budget,
    txs: I,
    scope_id: &str,
    reference: &Reference,
) -> Decimal
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let window = budget.period.window();
    txs.into_iter()
        .filter(|t| {
            t.scope_id == scope_id
                && t.kind == TransactionKind::Expense
                && t.category == budget.category
                && window.contains(&t.timestamp, reference)
        })
        .map(|t| t.amount)
        .sum()
}

/// Copy of `budget` with `spent` recomputed from the log.
pub fn with_derived_spent<'a, I>(
    budget: &Budget,
    txs: I,
    scope_id: &str,
    reference: &Reference,
) -> Budget
where
    I: IntoIterator<Item = &'a Transaction>,
{
    Budget {
        spent: derived_budget_spent(budget, txs, scope_id, reference),
        ..budget.clone()
    }
}

/// Unclamped; a goal past its target reports more than 100.
pub fn goal_progress(goal: &Goal) -> Decimal {
    percentage(goal.current_amount, goal.target_amount)
}

pub fn goal_remaining(goal: &Goal) -> Decimal {
    goal.target_amount - goal.current_amount
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalSummary {
    pub completed: usize,
    pub active: usize,
    pub total_target: Decimal,
}

pub fn goal_summary(goals: &[Goal]) -> GoalSummary {
    let completed = goals
        .iter()
        .filter(|g| g.current_amount >= g.target_amount)
        .count();
    GoalSummary {
        completed,
        active: goals.len() - completed,
        total_target: goals.iter().map(|g| g.target_amount).sum(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "date", rename_all = "lowercase")]
pub enum DayLabel {
    Today,
    Yesterday,
    Date(NaiveDate),
}

impl DayLabel {
    pub fn for_date(date: NaiveDate, reference: &Reference) -> Self {
        if date == reference.today() {
            Self::Today
        } else if date == reference.yesterday() {
            Self::Yesterday
        } else {
            Self::Date(date)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<'a> {
    pub date: NaiveDate,
    pub label: DayLabel,
    pub transactions: Vec<&'a Transaction>,
}

/// Partitions by local calendar day. Groups appear in the order their first
/// transaction appears; each group keeps input order.
pub fn group_by_calendar_day<'a, I>(txs: I, reference: &Reference) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut groups: Vec<DayGroup<'a>> = Vec::new();
    let mut index: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for t in txs {
        let date = reference.local_date(&t.timestamp);
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(DayGroup {
                date,
                label: DayLabel::for_date(date, reference),
                transactions: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].transactions.push(t);
    }
    groups
}
