// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use fintabs::config::Settings;
use fintabs::state::AppState;
use fintabs::window::Clock;
use fintabs::{cli, commands::exporter};
use tempfile::tempdir;

fn setup() -> AppState {
    let now = Utc.with_ymd_and_hms(2025, 8, 20, 10, 0, 0).unwrap();
    AppState::new(Settings::default(), Clock::Fixed(now)).unwrap()
}

fn export(state: &AppState, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["fintabs", "export", "transactions"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("export subcommand expected");
    };
    exporter::handle(state, sub)
}

#[test]
fn csv_export_is_oldest_first() {
    let state = setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("tx.csv");
    export(&state, &["--out", path.to_str().unwrap()]).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["id", "timestamp", "tab", "type", "amount", "category", "account", "comment"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][5], "Зарплата");
    assert_eq!(&rows[0][3], "income");
    assert_eq!(&rows[0][1], "2025-08-18T15:00:00+05:00");
    assert_eq!(&rows[2][5], "Продукты");
    assert_eq!(&rows[2][7], "Магнум");
}

#[test]
fn json_export_for_empty_tab() {
    let state = setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("tx.json");
    export(
        &state,
        &["--format", "json", "--tab", "home", "--out", path.to_str().unwrap()],
    )
    .unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 0);
}

#[test]
fn json_export_all_tabs() {
    let state = setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("all.json");
    export(
        &state,
        &["--format", "JSON", "--all", "--out", path.to_str().unwrap()],
    )
    .unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["type"], "income");
    assert_eq!(items[2]["comment"], "Магнум");
    assert!(items[0]["comment"].is_null());
}

#[test]
fn unknown_format_errors() {
    let state = setup();
    let dir = tempdir().unwrap();
    let path = dir.path().join("tx.xml");
    let err = export(
        &state,
        &["--format", "xml", "--out", path.to_str().unwrap()],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unknown format"));
    assert!(!path.exists());
}
