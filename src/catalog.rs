// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::TransactionKind;
use crate::utils::sanitize_category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetCategory {
    pub icon: &'static str,
    pub name: &'static str,
}

impl PresetCategory {
    const fn new(icon: &'static str, name: &'static str) -> Self {
        Self { icon, name }
    }

    /// Label as offered in the picker, icon first.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

pub const EXPENSE_CATEGORIES: &[PresetCategory] = &[
    PresetCategory::new("🛒", "Продукты"),
    PresetCategory::new("🚗", "Транспорт"),
    PresetCategory::new("🏠", "Аренда"),
    PresetCategory::new("💡", "Коммунальные"),
    PresetCategory::new("🎉", "Развлечения"),
    PresetCategory::new("👕", "Одежда"),
    PresetCategory::new("🏥", "Здоровье"),
    PresetCategory::new("📚", "Образование"),
    PresetCategory::new("🍕", "Рестораны"),
    PresetCategory::new("💳", "Другое"),
];

pub const INCOME_CATEGORIES: &[PresetCategory] = &[
    PresetCategory::new("💰", "Зарплата"),
    PresetCategory::new("💼", "Фриланс"),
    PresetCategory::new("🎁", "Подарок"),
    PresetCategory::new("📈", "Инвестиции"),
    PresetCategory::new("🏆", "Бонус"),
    PresetCategory::new("💸", "Другое"),
];

pub const ACCOUNTS: &[&str] = &["Kaspi", "Halyk", "Jusan", "Freedom", "Наличные"];

pub const DEFAULT_ACCOUNT: &str = "Kaspi";

pub fn categories(kind: TransactionKind) -> &'static [PresetCategory] {
    match kind {
        TransactionKind::Expense => EXPENSE_CATEGORIES,
        TransactionKind::Income => INCOME_CATEGORIES,
    }
}

/// Whether `category` (raw or already sanitized) names one of the presets
/// for `kind`.
pub fn is_preset(kind: TransactionKind, category: &str) -> bool {
    let clean = sanitize_category(category);
    categories(kind).iter().any(|c| c.name == clean)
}
