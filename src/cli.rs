// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_parser(value_parser!(usize))
        .help("Show at most N rows")
}

fn date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .help("YYYY-MM-DD (default: today)")
}

pub fn build_cli() -> Command {
    Command::new("twosplit")
        .about("Shared expenses and joint savings for a two-person household")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("member")
                .about("Member names and settlement order")
                .subcommand(
                    Command::new("names")
                        .about("Set display names")
                        .arg(Arg::new("a").long("a").help("Name of member A"))
                        .arg(Arg::new("b").long("b").help("Name of member B")),
                )
                .subcommand(Command::new("list").about("Show members"))
                .subcommand(
                    Command::new("priority")
                        .about("Member paid first when savings cannot cover both")
                        .arg(Arg::new("member").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Expense categories")
                .subcommand(Command::new("add").arg(Arg::new("name").required(true)))
                .subcommand(Command::new("list"))
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true))),
        )
        .subcommand(
            Command::new("tx")
                .about("Expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(date_arg())
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("payer")
                                .long("payer")
                                .required(true)
                                .help("a, b, or a member name"),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("private")
                                .long("private")
                                .action(ArgAction::SetTrue)
                                .help("Personal expense, not split"),
                        )
                        .arg(
                            Arg::new("split")
                                .long("split")
                                .value_parser(["equal", "percent", "fixed"])
                                .default_value("equal"),
                        )
                        .arg(
                            Arg::new("percent")
                                .long("percent")
                                .help("Payer's own share as a fraction 0..1 (percent split)"),
                        )
                        .arg(
                            Arg::new("fixed-who")
                                .long("fixed-who")
                                .help("Member owing the fixed amount (default: payer)"),
                        )
                        .arg(
                            Arg::new("fixed-amount")
                                .long("fixed-amount")
                                .help("Amount owed by --fixed-who (default: half)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("payer").long("payer"))
                        .arg(limit_arg()),
                )),
        )
        .subcommand(
            Command::new("savings")
                .about("Joint savings account")
                .subcommand(
                    Command::new("deposit")
                        .arg(date_arg())
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("member").long("member").help("Depositor"))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(
                    Command::new("payout")
                        .arg(date_arg())
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("member")
                                .long("member")
                                .required(true)
                                .help("Recipient"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(Command::new("list").arg(limit_arg()))),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Net balances, savings and suggested payout"),
        ))
        .subcommand(
            Command::new("settle")
                .about("Show the suggested payout; --commit records it")
                .arg(date_arg())
                .arg(
                    Arg::new("commit")
                        .long("commit")
                        .action(ArgAction::SetTrue)
                        .help("Record the suggested payouts in savings"),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budgets per category")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(Command::new("list").arg(Arg::new("month").long("month")))
                .subcommand(json_flags(
                    Command::new("report").arg(Arg::new("month").long("month").required(true)),
                )),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .value_parser(["csv", "json"])
                            .default_value("csv"),
                    )
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Find rows the ledger would coerce"))
}
