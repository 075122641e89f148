// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Cursor;

use chrono::{TimeZone, Utc};
use fintabs::commands::shell;
use fintabs::config::Settings;
use fintabs::state::AppState;
use fintabs::window::Clock;

fn setup() -> AppState {
    let now = Utc.with_ymd_and_hms(2025, 8, 20, 10, 0, 0).unwrap();
    AppState::new(Settings::default(), Clock::Fixed(now)).unwrap()
}

#[test]
fn session_keeps_added_transactions() {
    let mut state = setup();
    let input = Cursor::new(
        "# add lunch\n\
         tx add --amount 2500 --category \"🍕 Рестораны\" --comment \"Обед с командой\"\n\
         \n\
         tx list --json\n\
         exit\n\
         tx add --amount 1 --category Другое\n",
    );
    let executed = shell::run(&mut state, input, false).unwrap();
    assert_eq!(executed, 2);
    assert_eq!(state.store.transactions().len(), 4);
    let added = &state.store.transactions()[0];
    assert_eq!(added.category, "Рестораны");
    assert_eq!(added.comment.as_deref(), Some("Обед с командой"));
}

#[test]
fn failures_do_not_end_session() {
    let mut state = setup();
    let input = Cursor::new(
        "tx add --amount abc --category Продукты\n\
         tx frobnicate\n\
         budgets --tab nowhere\n\
         shell\n\
         tx add --tab home --amount 700 --category Ремонт\n",
    );
    let executed = shell::run(&mut state, input, false).unwrap();
    assert_eq!(executed, 1);
    assert_eq!(state.store.transactions().len(), 4);
    assert_eq!(state.store.transactions()[0].scope_id, "home");
}

#[test]
fn unbalanced_quotes_are_skipped() {
    let mut state = setup();
    let input = Cursor::new("tx add --amount 5 --category \"Продукты\ngoals\n");
    let executed = shell::run(&mut state, input, false).unwrap();
    assert_eq!(executed, 1);
    assert_eq!(state.store.transactions().len(), 3);
}

#[test]
fn process_options_rejected_per_line() {
    let mut state = setup();
    let input = Cursor::new(
        "tx add --amount 100 --category Продукты --now 2020-01-01T00:00:00Z\n\
         goals --config other.toml\n\
         tx add --amount 100 --category Продукты -t home\n",
    );
    let executed = shell::run(&mut state, input, false).unwrap();
    assert_eq!(executed, 1);
    assert_eq!(state.store.transactions().len(), 4);
    let added = &state.store.transactions()[0];
    assert_eq!(added.scope_id, "home");
    assert_eq!(added.timestamp, state.clock.now());
}
