// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintabs::aggregate;
use fintabs::models::Goal;
use rust_decimal::Decimal;

fn goal(target: i64, current: i64) -> Goal {
    Goal {
        id: 1,
        name: "Отпуск в Турции".into(),
        target_amount: Decimal::from(target),
        current_amount: Decimal::from(current),
        deadline: None,
        icon: "✈️".into(),
    }
}

#[test]
fn progress_and_remaining() {
    let g = goal(500_000, 320_000);
    assert_eq!(aggregate::goal_progress(&g), Decimal::from(64));
    assert_eq!(aggregate::goal_remaining(&g), Decimal::from(180_000));
}

#[test]
fn progress_not_clamped() {
    let g = goal(100, 150);
    assert_eq!(aggregate::goal_progress(&g), Decimal::from(150));
    assert_eq!(aggregate::goal_remaining(&g), Decimal::from(-50));
}

#[test]
fn zero_target_progress_is_zero() {
    assert_eq!(aggregate::goal_progress(&goal(0, 10)), Decimal::ZERO);
}

#[test]
fn summary_counts_and_total() {
    let goals = vec![
        goal(500_000, 320_000),
        goal(450_000, 450_000),
        goal(1_000_000, 650_000),
    ];
    let summary = aggregate::goal_summary(&goals);
    assert_eq!(summary.completed, 1);
    assert_eq!(summary.active, 2);
    assert_eq!(summary.total_target, Decimal::from(1_950_000));

    let empty = aggregate::goal_summary(&[]);
    assert_eq!(empty.completed, 0);
    assert_eq!(empty.active, 0);
    assert_eq!(empty.total_target, Decimal::ZERO);
}
