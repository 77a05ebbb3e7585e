// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, command, value_parser};

fn date_arg() -> Arg {
    arg!(--date <DATE> "Reference date YYYY-MM-DD (default: today)").required(false)
}

pub fn build_cli() -> Command {
    command!()
        .name("payoutcal")
        .about("Quarterly payout cycles: what gets paid when")
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print pretty JSON instead of a table")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("jsonl")
                .long("jsonl")
                .help("Print JSON lines instead of a table")
                .action(ArgAction::SetTrue)
                .conflicts_with("json")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging on stderr (repeat for more)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("next")
                .about("Next payout date and the window it pays out")
                .arg(date_arg()),
        )
        .subcommand(
            Command::new("current")
                .about("Quarter currently accruing and when it will be paid")
                .arg(date_arg()),
        )
        .subcommand(
            Command::new("quarter")
                .about("Window bounds and payout date of one quarter")
                .arg(arg!(<QUARTER> "Quarter as YYYY-Qn, e.g. 2024-Q3")),
        )
        .subcommand(
            Command::new("schedule")
                .about("Upcoming payout cycles")
                .arg(date_arg())
                .arg(
                    arg!(--count <N> "How many cycles to list (default from config)")
                        .required(false)
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Write payout cycles in a date range to a file")
                .arg(arg!(--from <DATE> "First payout date to include").required(true))
                .arg(arg!(--to <DATE> "Last payout date to include").required(true))
                .arg(
                    arg!(--format <FORMAT> "csv|json")
                        .required(false)
                        .default_value("csv"),
                )
                .arg(arg!(--out <PATH> "Output file").required(true)),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show").about("Print effective settings"))
                .subcommand(Command::new("path").about("Print the config file path"))
                .subcommand(
                    Command::new("set")
                        .about("Set a value: clock local|utc, output table|json|jsonl, schedule_count N")
                        .arg(arg!(<KEY>))
                        .arg(arg!(<VALUE>)),
                ),
        )
}
