//! Replay a JSON-lines file of raw events.
//!
//! One `{"action": ..., "extras": {...}}` object per line. Blank lines and
//! lines starting with `#` are skipped.

use anyhow::{Context, Result};
use std::path::Path;
use veterinaria_events_types::RawEvent;

use crate::app::App;
use crate::config::Config;

/// Parse a JSON-lines event log.
pub fn parse_events(contents: &str) -> Result<Vec<RawEvent>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid event on line {}", i + 1))
        })
        .collect()
}

/// Run the replay command.
pub async fn run(config: &Config, file: &Path) -> Result<()> {
    let contents = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let events = parse_events(&contents)?;

    let app = App::start(config);
    for raw in &events {
        app.dispatcher().dispatch_raw(raw);
    }
    tracing::info!("replayed {} events", events.len());

    super::print_report(&app.report().await?)
}
