// src/config.rs
use header_bump_domain::BumpRule;
use header_bump_shared_kernel::{BumpError, Ceiling, ConstantName, FilePath, PresentationError};
use log::LevelFilter;

use crate::cli::Args;
use crate::profile::ProfileId;

/// How a successful outcome is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: FilePath,
    pub profile: ProfileId,
    pub rule: BumpRule,
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl TryFrom<Args> for Config {
    type Error = BumpError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let path = args.file.ok_or(PresentationError::MissingArgument)?;
        let profile = args.profile.profile();

        let name = match args.constant {
            Some(name) => ConstantName::new(name)?,
            None => ConstantName::new(profile.constant)?,
        };
        let ceiling = if args.no_max { None } else { args.max.or(profile.ceiling) };
        let rule = BumpRule::new(name, ceiling.map(Ceiling::new))?;

        Ok(Self {
            path: FilePath::new(path),
            profile: args.profile,
            rule,
            dry_run: args.dry_run,
            format: args.format,
        })
    }
}

/// Default log level before `RUST_LOG` is consulted.
pub fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
