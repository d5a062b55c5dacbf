use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use header_bump::cli::Args;
use header_bump::config::{self, Config};
use header_bump::profile::ProfileId;
use header_bump::{app, logging, presentation};
use header_bump_shared_kernel::ErrorCategory;

fn main() -> ExitCode {
    let raw: Vec<OsString> = std::env::args_os().collect();
    let args = match Args::try_parse_from(&raw) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ProfileId::sniff(&raw).exit_code(ErrorCategory::Usage);
        }
    };

    logging::init(config::log_level(args.verbose, args.quiet));
    let profile = args.profile;

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", presentation::error_line(&e));
            return profile.exit_code(e.category());
        }
    };

    match app::execute(&config) {
        Ok(outcome) => {
            presentation::report(&mut std::io::stdout().lock(), &outcome, config.format);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", presentation::error_line(&e));
            config.profile.exit_code(e.category())
        }
    }
}
