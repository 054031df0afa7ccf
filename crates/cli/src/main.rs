// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::error::ErrorKind;
use clap::Parser;
use ilorest::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            e.exit()
        }
        Err(e) => {
            let err = ilorest::parse_error(&e);
            eprintln!("error: {}", err);
            std::process::exit(err.exit_code());
        }
    };

    ilorest::logging::init(cli.debug);
    if let Err(e) = ilorest::run(cli.command) {
        tracing::debug!("command failed: {:?}", e);
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
