// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use fintabs::{cli, commands, state::AppState};

fn main() -> Result<()> {
    // Logs go to stderr so tables and JSON on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = cli::build_cli().get_matches();
    let mut state = AppState::from_matches(&matches)?;

    match matches.subcommand() {
        Some(("shell", _)) => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            commands::shell::run(&mut state, stdin.lock(), interactive)?;
        }
        Some(_) => commands::dispatch(&mut state, &matches)?,
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
