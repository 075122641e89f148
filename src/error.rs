// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::wizard::Step;

/// Rejected input on transaction creation. Blocking: the record is not
/// accepted and the message is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Amount is required")]
    MissingAmount,

    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(String),

    #[error("Category is required")]
    MissingCategory,

    #[error("Account is required")]
    MissingAccount,

    #[error("Unknown tab '{0}'")]
    UnknownScope(String),

    #[error("Already on the last step, submit instead")]
    AlreadyLastStep,

    #[error("Action not available on step {current:?}, expected {expected:?}")]
    WrongStep { current: Step, expected: Step },
}

/// A percentage was asked for with a zero denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Percentage undefined for a zero denominator")]
pub struct DivisionUndefined;
