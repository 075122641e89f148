// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintabs::config::{self, Settings};
use fintabs::utils::Locale;
use tempfile::tempdir;

#[test]
fn partial_file_keeps_defaults() {
    let settings = config::parse("locale = \"ru\"\nrecent_limit = 10\n").unwrap();
    assert_eq!(settings.locale, Locale::Ru);
    assert_eq!(settings.recent_limit, 10);
    assert_eq!(settings.default_tab, "personal");
    assert_eq!(settings.utc_offset, "+05:00");
    assert_eq!(settings.currency_symbol, "₸");
    assert_eq!(settings.top_categories, 5);
}

#[test]
fn empty_file_is_default() {
    assert_eq!(config::parse("").unwrap(), Settings::default());
}

#[test]
fn invalid_offset_rejected() {
    assert!(config::parse("utc_offset = \"Almaty\"").is_err());
    assert!(config::parse("utc_offset = \"+05:99\"").is_err());
    assert!(config::parse("utc_offset = \"+999999:00\"").is_err());
}

#[test]
fn unknown_keys_rejected() {
    let err = config::parse("theme = \"dark\"").unwrap_err();
    assert!(format!("{:#}", err).contains("theme"));
}

#[test]
fn bad_locale_rejected() {
    assert!(config::parse("locale = \"de\"").is_err());
}

#[test]
fn load_from_explicit_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fintabs.toml");
    std::fs::write(
        &path,
        "default_tab = \"business\"\nutc_offset = \"Z\"\ncurrency_symbol = \"$\"\n",
    )
    .unwrap();
    let settings = config::load(Some(path.as_path())).unwrap();
    assert_eq!(settings.default_tab, "business");
    assert_eq!(settings.offset().unwrap().local_minus_utc(), 0);
    assert_eq!(settings.currency_symbol, "$");
}

#[test]
fn missing_explicit_path_errors() {
    let dir = tempdir().unwrap();
    let err = config::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("not found"));
}
