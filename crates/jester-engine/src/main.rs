//! Engine binary for the Jester behavior controller.
//!
//! Loads configuration, seeds an in-memory world with the beast and a crowd
//! of humanoid bystanders, and plays a scripted encounter through the event
//! bus. Every reaction is logged; a summary is logged at the end.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `jester-config.yaml`
//! 3. Build the world and register the beast
//! 4. Run the encounter
//! 5. Log the summary

mod config;
mod encounter;
mod error;
mod listeners;

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::JesterConfig;
use crate::error::EngineError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the beast
/// cannot be registered.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("jester-engine starting");

    let config = load_config()?;
    info!(
        seed = config.world.seed,
        rounds = config.world.rounds,
        bystanders = config.world.bystanders,
        emote_profiles = config.emote_profiles.len(),
        "Configuration loaded"
    );

    let summary = encounter::run_encounter(&config)?;
    info!(
        rounds = summary.rounds,
        downed_rounds = summary.downed_rounds,
        beast_emotes = summary.beast_emotes,
        matched_sounds = summary.matched_sounds,
        giggles = summary.giggles,
        knocks = summary.knocks,
        downstream_handled = summary.downstream_handled,
        swings = summary.swings,
        transformed = summary.transformed,
        companion_spawned = summary.companion_spawned,
        giggle_rate = ?summary.giggle_rate(),
        "Encounter complete"
    );

    Ok(())
}

/// Load configuration from `jester-config.yaml`, falling back to defaults.
fn load_config() -> Result<JesterConfig, EngineError> {
    let config_path = Path::new("jester-config.yaml");
    if config_path.exists() {
        let config = JesterConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(JesterConfig::default())
    }
}
