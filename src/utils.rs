// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::aggregate::DayLabel;

static CATEGORY_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\s0-9A-Za-z_\x{0400}-\x{04FF}]").expect("static regex"));

/// Drops icons and punctuation from a category label: only whitespace, ASCII
/// word characters and Cyrillic survive, then the result is trimmed.
pub fn sanitize_category(s: &str) -> String {
    CATEGORY_NOISE.replace_all(s, "").trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(anyhow::anyhow!("Unsupported locale '{}', expected en|ru", other)),
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Genitive forms, as used after a day number.
const MONTHS_RU: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

pub fn fmt_day_month(date: NaiveDate, locale: Locale) -> String {
    let idx = date.month0() as usize;
    let month = match locale {
        Locale::En => MONTHS_EN[idx],
        Locale::Ru => MONTHS_RU[idx],
    };
    format!("{} {}", date.day(), month)
}

pub fn fmt_day_label(label: &DayLabel, locale: Locale) -> String {
    match (label, locale) {
        (DayLabel::Today, Locale::En) => "Today".into(),
        (DayLabel::Today, Locale::Ru) => "Сегодня".into(),
        (DayLabel::Yesterday, Locale::En) => "Yesterday".into(),
        (DayLabel::Yesterday, Locale::Ru) => "Вчера".into(),
        (DayLabel::Date(d), _) => fmt_day_month(*d, locale),
    }
}

/// Whole units, space-grouped thousands, symbol last: `1 234 567 ₸`.
pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    let rounded = d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{} {}", sign, grouped, symbol)
}

pub fn fmt_percent(d: &Decimal) -> String {
    format!("{:.1}%", d.round_dp(1))
}

/// Bar widths and progress indicators only render within 0..=100.
pub fn clamp_percent(d: Decimal) -> Decimal {
    d.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
