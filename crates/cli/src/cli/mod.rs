// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub use args::{CredentialArgs, LoginArgs};

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Session:
  login                    Log in to an iLO
  logout                   End the current session
  select                   Select a resource type, or show the selection

Settings:
  get                      Show properties of the selected type
  set                      Stage property changes on the selected type
  status                   Show staged changes waiting for commit
  commit                   Send staged changes to the iLO

iLO:
  disableilofunctionality  Disable iLO network access

Other:
  completion               Generate shell completions
";

const QUICKSTART_HELP: &str = "\
Get started:
  ilorest login https://10.0.0.5 -u admin -p secret
  ilorest select Bios.
  ilorest set Attributes/BootMode=Uefi
  ilorest status
  ilorest commit";

#[derive(Parser)]
#[command(name = "ilorest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage HPE iLO through the Redfish REST API")]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────
    /// Log in to an iLO
    #[command(after_help = "Examples:\n  \
        ilorest login https://10.0.0.5 -u admin -p secret   Log in with explicit values\n  \
        ilorest login                                       Use url/username/password from config")]
    Login {
        /// iLO URL (defaults to `url` in config.toml)
        url: Option<String>,

        #[command(flatten)]
        creds: CredentialArgs,
    },

    /// End the current session
    Logout,

    /// Select a resource type, or show the current selection
    #[command(after_help = "Examples:\n  \
        ilorest select Bios.       Select the BIOS settings\n  \
        ilorest select             Show the current selection")]
    Select {
        /// Resource type prefix, e.g. `Bios.` or `ComputerSystem.`
        type_name: Option<String>,

        #[command(flatten)]
        login: LoginArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Settings
    // ─────────────────────────────────────────────────────────────────────────
    /// Show properties of the selected type
    Get {
        /// Property names; nested names use `/` (all scalar properties if omitted)
        properties: Vec<String>,

        #[command(flatten)]
        login: LoginArgs,
    },

    /// Stage property changes on the selected type
    #[command(arg_required_else_help = true)]
    Set {
        /// PROPERTY=VALUE pairs
        #[arg(required = true)]
        assignments: Vec<String>,

        #[command(flatten)]
        login: LoginArgs,
    },

    /// Show staged changes waiting for commit
    #[command(after_help = "Changes of the selected type are marked (Currently selected).")]
    Status {
        #[command(flatten)]
        creds: CredentialArgs,
    },

    /// Send staged changes to the iLO
    Commit {
        #[command(flatten)]
        login: LoginArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // iLO
    // ─────────────────────────────────────────────────────────────────────────
    /// Disable iLO network access on the logged in server
    #[command(
        name = "disableilofunctionality",
        long_about = "Disables iLO's accessibility via the network and resets iLO.\n\n\
            WARNING: iLO stops responding to network operations, including REST,\n\
            until it is re-enabled from the RBSU menu."
    )]
    Disableilofunctionality {
        /// Not accepted; present to report a clear error
        #[arg(hide = true)]
        args: Vec<String>,

        #[command(flatten)]
        login: LoginArgs,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
