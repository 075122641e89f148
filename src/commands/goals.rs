// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use crate::aggregate::{self, GoalSummary};
use crate::models::Goal;
use crate::state::AppState;
use crate::utils::{clamp_percent, fmt_money, fmt_percent, pretty_table};

#[derive(Debug, Clone, Serialize)]
pub struct GoalRow {
    pub name: String,
    pub icon: String,
    pub current: Decimal,
    pub target: Decimal,
    pub progress: Decimal,
    pub bar: Decimal,
    pub remaining: Decimal,
    pub deadline: Option<String>,
}

impl GoalRow {
    pub fn new(goal: &Goal) -> Self {
        let progress = aggregate::goal_progress(goal);
        Self {
            name: goal.name.clone(),
            icon: goal.icon.clone(),
            current: goal.current_amount,
            target: goal.target_amount,
            progress,
            bar: clamp_percent(progress),
            remaining: aggregate::goal_remaining(goal),
            deadline: goal.deadline.map(|d| d.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalsView {
    pub goals: Vec<GoalRow>,
    pub summary: GoalSummary,
}

pub fn build(state: &AppState) -> GoalsView {
    let goals = state.store.goals();
    GoalsView {
        goals: goals.iter().map(GoalRow::new).collect(),
        summary: aggregate::goal_summary(goals),
    }
}

/// `--json` prints the whole view. `--jsonl` prints one line per goal, then
/// one `{"summary": ...}` line.
pub fn json_lines(view: &GoalsView, jsonl: bool) -> Result<Vec<String>> {
    if !jsonl {
        return Ok(vec![serde_json::to_string_pretty(view)?]);
    }
    let mut lines = view
        .goals
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    lines.push(serde_json::to_string(&json!({ "summary": view.summary }))?);
    Ok(lines)
}

pub fn handle(state: &AppState, sub: &clap::ArgMatches) -> Result<()> {
    let view = build(state);
    if sub.get_flag("json") || sub.get_flag("jsonl") {
        for line in json_lines(&view, sub.get_flag("jsonl"))? {
            println!("{}", line);
        }
        return Ok(());
    }
    let sym = &state.settings.currency_symbol;
    let rows = view
        .goals
        .iter()
        .map(|g| {
            vec![
                format!("{} {}", g.icon, g.name),
                fmt_money(&g.current, sym),
                fmt_money(&g.target, sym),
                fmt_percent(&g.progress),
                fmt_money(&g.remaining, sym),
                g.deadline.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Goal", "Saved", "Target", "Progress", "Remaining", "Deadline"],
            rows
        )
    );
    println!(
        "Completed: {}  Active: {}  Total target: {}",
        view.summary.completed,
        view.summary.active,
        fmt_money(&view.summary.total_target, sym)
    );
    Ok(())
}
