// src/logging.rs
use std::io::IsTerminal;

use log::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// Library crates log through the `log` facade; the subscriber's `log`
/// bridge picks those records up. `RUST_LOG` overrides `default_level`.
pub fn init(default_level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string().to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
