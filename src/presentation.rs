// src/presentation.rs
use std::io::Write;

use header_bump_usecase::BumpOutcome;
use log::warn;

use crate::config::OutputFormat;
use crate::error::Result;

/// Human or machine readable line describing `outcome`.
pub fn render(outcome: &BumpOutcome, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(outcome)?,
        OutputFormat::Text if outcome.written => {
            format!("{} updated from {} to {}.", outcome.name, outcome.previous, outcome.current)
        }
        OutputFormat::Text => format!(
            "{} would be updated from {} to {} (dry run, {} unchanged).",
            outcome.name, outcome.previous, outcome.current, outcome.path
        ),
    };
    Ok(text)
}

pub fn print_outcome<W: Write>(out: &mut W, outcome: &BumpOutcome, format: OutputFormat) -> Result<()> {
    writeln!(out, "{}", render(outcome, format)?)?;
    out.flush()?;
    Ok(())
}

/// Print `outcome`, logging instead of failing when `out` is gone.
///
/// The file has already been handled by then, so a closed pipe must not turn
/// a completed bump into an error status.
pub fn report<W: Write>(out: &mut W, outcome: &BumpOutcome, format: OutputFormat) {
    if let Err(e) = print_outcome(out, outcome, format) {
        warn!("{} ({} is now {})", e, outcome.name, outcome.current);
    }
}

/// Diagnostic line for a failed run, printed on stderr.
pub fn error_line(err: &dyn std::error::Error) -> String {
    format!("ERROR: {err}")
}
