// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Three-step add-transaction flow.
//!
//! `TypeAndAmount -> Category -> Details`. Each field can only be edited on
//! its own step, `advance` is guarded by the current step being complete and
//! `submit` re-checks every step before handing out a [`NewTransaction`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::{self, DEFAULT_ACCOUNT};
use crate::error::ValidationError;
use crate::models::{NewTransaction, TransactionKind};
use crate::utils::sanitize_category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    TypeAndAmount,
    Category,
    Details,
}

impl Step {
    /// 1-based position, as shown in the progress indicator.
    pub const fn number(self) -> u8 {
        match self {
            Self::TypeAndAmount => 1,
            Self::Category => 2,
            Self::Details => 3,
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::TypeAndAmount => Some(Self::Category),
            Self::Category => Some(Self::Details),
            Self::Details => None,
        }
    }

    const fn prev(self) -> Option<Self> {
        match self {
            Self::TypeAndAmount => None,
            Self::Category => Some(Self::TypeAndAmount),
            Self::Details => Some(Self::Category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTransactionWizard {
    step: Step,
    scope_id: String,
    kind: TransactionKind,
    amount: String,
    category: String,
    comment: String,
    account: String,
}

impl AddTransactionWizard {
    pub fn new(scope_id: impl Into<String>) -> Self {
        Self {
            step: Step::TypeAndAmount,
            scope_id: scope_id.into(),
            kind: TransactionKind::Expense,
            amount: String::new(),
            category: String::new(),
            comment: String::new(),
            account: DEFAULT_ACCOUNT.to_string(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn set_kind(&mut self, kind: TransactionKind) -> Result<(), ValidationError> {
        self.expect_step(Step::TypeAndAmount)?;
        if kind != self.kind
            && catalog::is_preset(self.kind, &self.category)
            && !catalog::is_preset(kind, &self.category)
        {
            self.category.clear();
        }
        self.kind = kind;
        Ok(())
    }

    pub fn set_amount(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.expect_step(Step::TypeAndAmount)?;
        self.amount = raw.to_string();
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.expect_step(Step::Category)?;
        self.category = category.to_string();
        Ok(())
    }

    pub fn set_comment(&mut self, comment: &str) -> Result<(), ValidationError> {
        self.expect_step(Step::Details)?;
        self.comment = comment.to_string();
        Ok(())
    }

    pub fn set_account(&mut self, account: &str) -> Result<(), ValidationError> {
        self.expect_step(Step::Details)?;
        self.account = account.trim().to_string();
        Ok(())
    }

    /// Completeness check for the current step.
    pub fn validate_step(&self) -> Result<(), ValidationError> {
        match self.step {
            Step::TypeAndAmount => parse_amount(&self.amount).map(|_| ()),
            Step::Category => {
                if sanitize_category(&self.category).is_empty() {
                    Err(ValidationError::MissingCategory)
                } else {
                    Ok(())
                }
            }
            Step::Details => {
                if self.account.is_empty() {
                    Err(ValidationError::MissingAccount)
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn can_advance(&self) -> bool {
        self.step.next().is_some() && self.validate_step().is_ok()
    }

    pub fn advance(&mut self) -> Result<Step, ValidationError> {
        let next = self.step.next().ok_or(ValidationError::AlreadyLastStep)?;
        self.validate_step()?;
        debug!(from = self.step.number(), to = next.number(), "wizard advanced");
        self.step = next;
        Ok(next)
    }

    /// Goes one step back; a no-op on the first step.
    pub fn back(&mut self) -> Step {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Validates all steps and yields the record. The wizard resets on
    /// success and keeps its input on failure.
    pub fn submit(&mut self) -> Result<NewTransaction, ValidationError> {
        self.expect_step(Step::Details)?;
        let amount = parse_amount(&self.amount)?;
        let category = sanitize_category(&self.category);
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if self.account.is_empty() {
            return Err(ValidationError::MissingAccount);
        }
        let comment = self.comment.trim();
        let new = NewTransaction {
            amount,
            kind: self.kind,
            category,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
            account: self.account.clone(),
            scope_id: self.scope_id.clone(),
        };
        self.reset();
        Ok(new)
    }

    pub fn reset(&mut self) {
        *self = Self::new(std::mem::take(&mut self.scope_id));
    }

    fn expect_step(&self, expected: Step) -> Result<(), ValidationError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(ValidationError::WrongStep {
                current: self.step,
                expected,
            })
        }
    }
}

/// Accepts `5000`, `5 000`, `12,50` and `12.50`.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    let amount = cleaned
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidAmount(raw.trim().to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount.to_string()));
    }
    Ok(amount)
}
