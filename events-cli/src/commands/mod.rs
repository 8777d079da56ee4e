//! CLI command implementations.

pub mod channel;
pub mod dispatch;
pub mod replay;

use anyhow::Result;

use crate::app::Report;

/// Print a report as pretty JSON on stdout.
pub fn print_report(report: &Report) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
