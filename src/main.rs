use std::process::ExitCode;

use appicon::cli::{Cli, USAGE_EXAMPLE};
use appicon::commands;
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => {
                    eprintln!("{USAGE_EXAMPLE}");
                    ExitCode::from(1)
                }
            };
        }
    };

    match commands::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red(), e);
            ExitCode::from(1)
        }
    }
}
