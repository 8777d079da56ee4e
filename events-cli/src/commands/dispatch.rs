//! Dispatch a single event given on the command line.

use anyhow::{Context, Result};
use veterinaria_events_types::RawEvent;

use crate::app::App;
use crate::config::Config;

/// Build a raw event from an action and `KEY=VALUE` extras.
pub fn build_event(action: &str, extras: &[String]) -> Result<RawEvent> {
    extras.iter().try_fold(RawEvent::new(action), |raw, arg| {
        raw.with_extra_arg(arg)
            .with_context(|| format!("Invalid --extra {arg:?}"))
    })
}

/// Run the dispatch command.
pub async fn run(config: &Config, action: &str, extras: &[String]) -> Result<()> {
    let raw = build_event(action, extras)?;

    let app = App::start(config);
    app.dispatcher().dispatch_raw(&raw);

    super::print_report(&app.report().await?)
}
