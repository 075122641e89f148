// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use fintabs::aggregate::{self, KindFilter};
use fintabs::models::{Transaction, TransactionKind};
use fintabs::window::{Reference, Window};
use rust_decimal::Decimal;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 20, 10, 0, 0).unwrap()
}

fn tx(
    id: i64,
    amount: i64,
    kind: TransactionKind,
    category: &str,
    scope: &str,
    ts: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id,
        amount: Decimal::from(amount),
        kind,
        category: category.into(),
        comment: None,
        account: "Kaspi".into(),
        timestamp: ts,
        scope_id: scope.into(),
    }
}

/// The three sample transactions, most recent first.
fn sample_log() -> Vec<Transaction> {
    let now = now();
    vec![
        tx(1, 5_000, TransactionKind::Expense, "Продукты", "personal", now),
        tx(
            2,
            15_000,
            TransactionKind::Expense,
            "Транспорт",
            "personal",
            now - Duration::days(1),
        ),
        tx(
            3,
            350_000,
            TransactionKind::Income,
            "Зарплата",
            "personal",
            now - Duration::days(2),
        ),
    ]
}

#[test]
fn sample_log_sums() {
    let log = sample_log();
    let r = Reference::utc(now());
    assert_eq!(
        aggregate::sum_by_kind_and_window(&log, TransactionKind::Expense, Window::Today, &r),
        Decimal::from(5_000)
    );
    assert_eq!(
        aggregate::sum_by_kind_and_window(&log, TransactionKind::Income, Window::ThisMonth, &r),
        Decimal::from(350_000)
    );
    assert_eq!(
        aggregate::sum_by_kind_and_window(&log, TransactionKind::Expense, Window::ThisMonth, &r),
        Decimal::from(20_000)
    );
}

#[test]
fn sum_with_no_match_is_zero() {
    let r = Reference::utc(now());
    let empty: Vec<Transaction> = Vec::new();
    assert_eq!(
        aggregate::sum_by_kind_and_window(&empty, TransactionKind::Income, Window::All, &r),
        Decimal::ZERO
    );
    // Income exists, but not today
    let log = sample_log();
    assert_eq!(
        aggregate::sum_by_kind_and_window(&log, TransactionKind::Income, Window::Today, &r),
        Decimal::ZERO
    );
}

#[test]
fn month_window_excludes_previous_month() {
    let r = Reference::utc(now());
    let log = vec![
        tx(1, 100, TransactionKind::Expense, "A", "personal", now()),
        tx(
            2,
            900,
            TransactionKind::Expense,
            "A",
            "personal",
            Utc.with_ymd_and_hms(2025, 7, 31, 23, 0, 0).unwrap(),
        ),
        tx(
            3,
            50,
            TransactionKind::Expense,
            "A",
            "personal",
            Utc.with_ymd_and_hms(2024, 8, 20, 10, 0, 0).unwrap(),
        ),
    ];
    assert_eq!(
        aggregate::sum_by_kind_and_window(&log, TransactionKind::Expense, Window::ThisMonth, &r),
        Decimal::from(100)
    );
    assert_eq!(
        aggregate::sum_by_kind_and_window(&log, TransactionKind::Expense, Window::All, &r),
        Decimal::from(1_050)
    );
}

#[test]
fn net_income_matches_sum_difference() {
    let mut log = sample_log();
    log.push(tx(
        4,
        1_000,
        TransactionKind::Income,
        "Бонус",
        "personal",
        now() - Duration::days(40),
    ));
    let r = Reference::utc(now());
    for window in [Window::Today, Window::ThisWeek, Window::ThisMonth, Window::All] {
        let income =
            aggregate::sum_by_kind_and_window(&log, TransactionKind::Income, window, &r);
        let expense =
            aggregate::sum_by_kind_and_window(&log, TransactionKind::Expense, window, &r);
        assert_eq!(
            aggregate::net_income(&log, window, &r),
            income - expense,
            "window {:?}",
            window
        );
    }
}

#[test]
fn filter_by_scope_keeps_log_order() {
    let mut log = sample_log();
    log.insert(
        1,
        tx(9, 700, TransactionKind::Expense, "Аренда", "home", now()),
    );
    let personal = aggregate::filter_by_scope(&log, "personal");
    let ids: Vec<i64> = personal.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let home = aggregate::filter_by_scope(&log, "home");
    assert_eq!(home.len(), 1);
    assert!(aggregate::filter_by_scope(&log, "family").is_empty());
}

#[test]
fn category_breakdown_of_expenses() {
    let log = sample_log();
    let expenses = aggregate::filter_by_kind(&log, KindFilter::Expense);
    let breakdown = aggregate::category_breakdown(expenses);

    let mut expected = BTreeMap::new();
    expected.insert("Продукты".to_string(), Decimal::from(5_000));
    expected.insert("Транспорт".to_string(), Decimal::from(15_000));
    assert_eq!(breakdown, expected);
}

#[test]
fn category_breakdown_ignores_order() {
    let now = now();
    let mut log = vec![
        tx(1, 10, TransactionKind::Expense, "A", "p", now),
        tx(2, 20, TransactionKind::Expense, "B", "p", now),
        tx(3, 30, TransactionKind::Expense, "A", "p", now),
        tx(4, 5, TransactionKind::Expense, "", "p", now),
        tx(5, 1, TransactionKind::Expense, "C", "p", now),
    ];
    let baseline = aggregate::category_breakdown(&log);
    assert_eq!(baseline.get("A"), Some(&Decimal::from(40)));
    // Empty labels are kept as their own key
    assert_eq!(baseline.get(""), Some(&Decimal::from(5)));

    log.reverse();
    assert_eq!(aggregate::category_breakdown(&log), baseline);
    log.rotate_left(2);
    assert_eq!(aggregate::category_breakdown(&log), baseline);
}

#[test]
fn top_categories_sorted_descending() {
    let mut breakdown = BTreeMap::new();
    breakdown.insert("A".to_string(), Decimal::from(100));
    breakdown.insert("B".to_string(), Decimal::from(300));
    breakdown.insert("C".to_string(), Decimal::from(200));

    let top = aggregate::top_categories(&breakdown, 2);
    assert_eq!(
        top,
        vec![
            ("B".to_string(), Decimal::from(300)),
            ("C".to_string(), Decimal::from(200)),
        ]
    );
    assert_eq!(aggregate::top_categories(&breakdown, 10).len(), 3);
    assert!(aggregate::top_categories(&BTreeMap::new(), 5).is_empty());
}

#[test]
fn top_categories_ties_by_name() {
    let mut breakdown = BTreeMap::new();
    breakdown.insert("Zeta".to_string(), Decimal::from(50));
    breakdown.insert("Alpha".to_string(), Decimal::from(50));
    breakdown.insert("Mid".to_string(), Decimal::from(70));

    let names: Vec<String> = aggregate::top_categories(&breakdown, 3)
        .into_iter()
        .map(|(c, _)| c)
        .collect();
    assert_eq!(names, vec!["Mid", "Alpha", "Zeta"]);
}

#[test]
fn ratios_are_zero_without_income() {
    let zero = Decimal::ZERO;
    assert_eq!(aggregate::expense_ratio(zero, Decimal::from(500)), zero);
    assert_eq!(aggregate::savings_rate(zero, Decimal::from(500)), zero);
    assert_eq!(aggregate::category_share(Decimal::from(5), zero), zero);
    assert!(aggregate::checked_percentage(Decimal::ONE, zero).is_err());

    assert_eq!(
        aggregate::expense_ratio(Decimal::from(200), Decimal::from(50)),
        Decimal::from(25)
    );
    assert_eq!(
        aggregate::savings_rate(Decimal::from(200), Decimal::from(250)),
        Decimal::from(-25)
    );
}

#[test]
fn search_matches_category_or_comment() {
    let mut log = sample_log();
    log[1].comment = Some("Такси до центра".into());

    let hits = aggregate::search(&log, "такси");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);

    let hits = aggregate::search(&log, "ПРОДУКТ");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);

    assert_eq!(aggregate::search(&log, "   ").len(), 3);
    assert!(aggregate::search(&log, "nothing").is_empty());
}

#[test]
fn kind_filter_and_recent() {
    let log = sample_log();
    assert_eq!(aggregate::filter_by_kind(&log, KindFilter::All).len(), 3);
    assert_eq!(aggregate::filter_by_kind(&log, KindFilter::Income).len(), 1);
    assert_eq!(aggregate::filter_by_kind(&log, KindFilter::Expense).len(), 2);
    assert!("weird".parse::<KindFilter>().is_err());
    assert_eq!(" Income ".parse::<KindFilter>().unwrap(), KindFilter::Income);

    let recent = aggregate::recent(&log, 2);
    assert_eq!(recent.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(aggregate::recent(&log, 10).len(), 3);
}

#[test]
fn average_daily_spend_uses_thirty_days() {
    assert_eq!(
        aggregate::average_daily_spend(Decimal::from(30_000)),
        Decimal::from(1_000)
    );
    assert_eq!(aggregate::average_daily_spend(Decimal::ZERO), Decimal::ZERO);
}
