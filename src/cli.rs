// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON instead of a table"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    ]
}

fn derive_spent_arg() -> Arg {
    Arg::new("derive-spent")
        .long("derive-spent")
        .action(ArgAction::SetTrue)
        .help("Recompute budget spending from the selected tab's transactions")
}

fn commands() -> Vec<Command> {
    vec![
        Command::new("tabs").about("List financial tabs"),
        Command::new("dashboard").about("Balance, budgets and recent activity"),
        Command::new("tx")
            .about("Transactions")
            .subcommand_required(true)
            .subcommand(
                Command::new("list")
                    .about("Transactions grouped by day")
                    .arg(
                        Arg::new("type")
                            .long("type")
                            .default_value("all")
                            .value_parser(["all", "income", "expense"]),
                    )
                    .arg(
                        Arg::new("search")
                            .long("search")
                            .short('s')
                            .help("Match category or comment, case-insensitive"),
                    )
                    .args(json_args()),
            )
            .subcommand(
                Command::new("add")
                    .about("Add a transaction to the current session")
                    .arg(
                        Arg::new("type")
                            .long("type")
                            .default_value("expense")
                            .value_parser(["income", "expense"]),
                    )
                    .arg(Arg::new("amount").long("amount").required(true))
                    .arg(Arg::new("category").long("category").required(true))
                    .arg(Arg::new("account").long("account"))
                    .arg(Arg::new("comment").long("comment")),
            )
            .subcommand(
                Command::new("categories")
                    .about("Preset categories and accounts")
                    .arg(
                        Arg::new("type")
                            .long("type")
                            .default_value("expense")
                            .value_parser(["income", "expense"]),
                    ),
            ),
        Command::new("analytics")
            .about("Monthly statistics for the selected tab")
            .arg(
                Arg::new("top")
                    .long("top")
                    .value_parser(value_parser!(usize))
                    .help("Number of categories to show"),
            )
            .arg(derive_spent_arg())
            .args(json_args()),
        Command::new("budgets")
            .about("Budget utilization")
            .arg(derive_spent_arg())
            .args(json_args()),
        Command::new("goals")
            .about("Savings goals")
            .args(json_args()),
        Command::new("export")
            .about("Export data")
            .subcommand_required(true)
            .subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv|json"),
                    )
                    .arg(Arg::new("out").long("out").required(true))
                    .arg(
                        Arg::new("all")
                            .long("all")
                            .action(ArgAction::SetTrue)
                            .help("Export every tab, not only the selected one"),
                    ),
            ),
        Command::new("shell").about("Interactive session; added transactions stay until exit"),
    ]
}

fn tab_arg() -> Arg {
    Arg::new("tab")
        .long("tab")
        .short('t')
        .global(true)
        .help("Tab id (defaults to default_tab from the config)")
}

/// Options fixed for the whole process; a shell session inherits them.
fn session_args() -> [Arg; 2] {
    [
        Arg::new("config")
            .long("config")
            .global(true)
            .value_parser(value_parser!(PathBuf))
            .help("Path to fintabs.toml"),
        Arg::new("now")
            .long("now")
            .global(true)
            .help("Pin the reference time (RFC 3339)"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("fintabs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("FinTabs: tabs, transactions, budgets and goals")
        .arg(tab_arg())
        .args(session_args())
        .subcommands(commands())
}

/// Command parser for lines typed inside `fintabs shell`. Only `--tab` can
/// change per line.
pub fn build_shell_cli() -> Command {
    Command::new("fintabs")
        .no_binary_name(true)
        .disable_version_flag(true)
        .arg(tab_arg())
        .subcommands(commands())
}
