// src/cli/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::profile::ProfileId;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "bump",
    version = crate::VERSION,
    about = "Increment the version constant declared in a header file"
)]
pub struct Args {
    /// Header file holding the declaration, e.g. include/reach_version.h
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Compiled-in variant selecting constant, ceiling and exit codes
    #[arg(long, value_enum, default_value = "build", help_heading = "Declaration")]
    pub profile: ProfileId,

    /// Bump this constant instead of the profile's
    #[arg(long, value_name = "NAME", help_heading = "Declaration")]
    pub constant: Option<String>,

    /// Refuse to bump once the value reaches N
    #[arg(long, value_name = "N", conflicts_with = "no_max", help_heading = "Declaration")]
    pub max: Option<u64>,

    /// Drop the profile's ceiling
    #[arg(long, help_heading = "Declaration")]
    pub no_max: bool,

    /// Report the change without writing the file
    #[arg(long, help_heading = "Output")]
    pub dry_run: bool,

    /// Outcome format on stdout
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet", help_heading = "Output")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
}
