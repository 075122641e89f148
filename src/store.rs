// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::models::{
    Budget, BudgetPeriod, Goal, NewTransaction, Scope, Transaction, TransactionKind,
};

/// In-memory session state. The transaction log is append-only and kept
/// most-recent-first.
#[derive(Debug, Clone, Default)]
pub struct Store {
    scopes: Vec<Scope>,
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    goals: Vec<Goal>,
}

impl Store {
    pub fn new(
        scopes: Vec<Scope>,
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        goals: Vec<Goal>,
    ) -> Self {
        Self {
            scopes,
            transactions,
            budgets,
            goals,
        }
    }

    /// Sample data; transaction timestamps are placed relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let store = Self::new(
            seed_scopes(),
            seed_transactions(now),
            seed_budgets(),
            seed_goals(),
        );
        debug!(
            scopes = store.scopes.len(),
            transactions = store.transactions.len(),
            budgets = store.budgets.len(),
            goals = store.goals.len(),
            "store seeded"
        );
        store
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    pub fn scope(&self, id: &str) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.id == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Stamps `new` with an id and `now`, then puts it at the front of the log.
    pub fn add_transaction(
        &mut self,
        new: NewTransaction,
        now: DateTime<Utc>,
    ) -> Result<&Transaction, ValidationError> {
        if new.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount(new.amount.to_string()));
        }
        if new.category.trim().is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if new.account.trim().is_empty() {
            return Err(ValidationError::MissingAccount);
        }
        if self.scope(&new.scope_id).is_none() {
            return Err(ValidationError::UnknownScope(new.scope_id));
        }

        let id = self.next_id(now);
        let tx = Transaction {
            id,
            amount: new.amount,
            kind: new.kind,
            category: new.category,
            comment: new.comment.filter(|c| !c.trim().is_empty()),
            account: new.account,
            timestamp: now,
            scope_id: new.scope_id,
        };
        info!(
            id,
            scope = %tx.scope_id,
            kind = %tx.kind,
            amount = %tx.amount,
            "transaction added"
        );
        self.transactions.insert(0, tx);
        Ok(&self.transactions[0])
    }

    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let max_existing = self.transactions.iter().map(|t| t.id).max().unwrap_or(0);
        now.timestamp_millis().max(max_existing + 1)
    }
}

fn seed_scopes() -> Vec<Scope> {
    [
        ("personal", "Личные", "💰", "from-blue-500 to-cyan-500", 450_000),
        ("home", "Ремонт", "🏠", "from-orange-500 to-amber-500", 125_000),
        ("business", "Бизнес", "💼", "from-purple-500 to-pink-500", 890_000),
        ("family", "Семья", "👨‍👩‍👧", "from-green-500 to-emerald-500", 320_000),
    ]
    .into_iter()
    .map(|(id, name, icon, color, balance)| Scope {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color_theme: color.to_string(),
        cached_balance: Decimal::from(balance),
    })
    .collect()
}

fn seed_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            amount: Decimal::from(5_000),
            kind: TransactionKind::Expense,
            category: "Продукты".into(),
            comment: Some("Магнум".into()),
            account: "Kaspi".into(),
            timestamp: now,
            scope_id: "personal".into(),
        },
        Transaction {
            id: 2,
            amount: Decimal::from(15_000),
            kind: TransactionKind::Expense,
            category: "Транспорт".into(),
            comment: Some("Такси до центра".into()),
            account: "Наличные".into(),
            timestamp: now - Duration::days(1),
            scope_id: "personal".into(),
        },
        Transaction {
            id: 3,
            amount: Decimal::from(350_000),
            kind: TransactionKind::Income,
            category: "Зарплата".into(),
            comment: None,
            account: "Halyk".into(),
            timestamp: now - Duration::days(2),
            scope_id: "personal".into(),
        },
    ]
}

fn seed_budgets() -> Vec<Budget> {
    [
        (1, "Продукты", 80_000, 45_200),
        (2, "Развлечения", 20_000, 18_500),
        (3, "Транспорт", 30_000, 12_300),
    ]
    .into_iter()
    .map(|(id, category, limit, spent)| Budget {
        id,
        category: category.to_string(),
        limit: Decimal::from(limit),
        spent: Decimal::from(spent),
        period: BudgetPeriod::Monthly,
    })
    .collect()
}

fn seed_goals() -> Vec<Goal> {
    [
        (1, "Отпуск в Турции", 500_000, 320_000, "✈️"),
        (2, "Новый MacBook", 450_000, 180_000, "💻"),
        (3, "Резервный фонд", 1_000_000, 650_000, "🛡️"),
    ]
    .into_iter()
    .map(|(id, name, target, current, icon)| Goal {
        id,
        name: name.to_string(),
        target_amount: Decimal::from(target),
        current_amount: Decimal::from(current),
        deadline: None,
        icon: icon.to_string(),
    })
    .collect()
}
