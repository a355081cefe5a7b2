//! Skirmish - Main entry point.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skirmish_engine::infrastructure::console::ConsoleNarrator;
use skirmish_engine::infrastructure::seed;
use skirmish_engine::infrastructure::settings::Settings;
use skirmish_engine::App;

fn main() -> anyhow::Result<()> {
    // A missing .env is normal.
    let _ = dotenvy::dotenv();

    let settings = Settings::from_env();

    // Diagnostics go to stderr so stdout carries only narration.
    let (filter, rejected_filter) = settings.env_filter();
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(err) = rejected_filter {
        tracing::warn!(filter = %settings.log_filter, error = %err, "Invalid log filter, using default");
    }
    if let Some(raw) = &settings.unrecognised_color {
        tracing::warn!(value = %raw, "Unrecognised SKIRMISH_COLOR, using auto");
    }

    let color = settings.use_color(std::io::stdout().is_terminal());
    tracing::info!(color, "Starting Skirmish");

    let roster = seed::default_roster().context("decoding bundled roster")?;
    let narrator = Arc::new(ConsoleNarrator::stdout(color));
    let app = App::with_roster(roster, narrator).context("seeding character context")?;

    let report = app.combat.run().context("running combat")?;
    tracing::info!(?report, "Skirmish finished");

    Ok(())
}
