// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::cli;
use crate::commands;
use crate::state::AppState;

const PROMPT: &str = "fintabs> ";

/// Reads commands line by line and runs them against one store, so
/// transactions added early in the session show up in later views. Errors are
/// reported and the session continues. Returns the number of commands run.
pub fn run<R: BufRead>(state: &mut AppState, input: R, interactive: bool) -> Result<usize> {
    let mut executed = 0;
    if interactive {
        println!("FinTabs shell. Type 'help' for commands, 'exit' to quit.");
    }
    let mut lines = input.lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if matches!(trimmed, "exit" | "quit") {
            break;
        }
        if trimmed == "help" {
            cli::build_shell_cli().print_help()?;
            println!();
            continue;
        }

        let Some(words) = shlex::split(trimmed) else {
            eprintln!("Unbalanced quotes in: {}", trimmed);
            continue;
        };
        let matches = match cli::build_shell_cli().try_get_matches_from(words) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        match matches.subcommand_name() {
            Some("shell") => {
                eprintln!("Already in a shell session");
                continue;
            }
            None => continue,
            Some(_) => {}
        }
        debug!(command = trimmed, "shell command");
        if let Err(e) = commands::dispatch(state, &matches) {
            warn!(command = trimmed, error = %e, "shell command failed");
            eprintln!("Error: {:#}", e);
            continue;
        }
        executed += 1;
    }
    Ok(executed)
}
