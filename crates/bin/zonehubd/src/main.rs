//! # zonehubd — zonehub daemon
//!
//! Composition root that wires the adapter, event bus, and sequencer
//! together and runs the configured scenes.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Construct the amplifier adapter, seeded with the entities the scenes
//!   reference
//! - Construct the sequencer, injecting the adapter via the port trait
//! - Activate the selected scene (or every enabled scene) and report the
//!   resulting zone states
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;

use zonehub_adapter_virtual::VirtualAmplifier;
use zonehub_app::event_bus::InProcessEventBus;
use zonehub_app::sequencer::ActivationSequencer;
use zonehub_domain::scene::Scene;

use crate::config::Config;

// Commands are issued strictly sequentially; a single-threaded runtime is all
// the control flow there is.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .init();

    let mut scenes = config
        .scenes
        .iter()
        .map(config::SceneConfig::to_scene)
        .collect::<Result<Vec<_>, _>>()
        .context("invalid scene configuration")?;

    // An explicitly selected scene runs even when disabled; otherwise only
    // enabled scenes run.
    if let Some(selected) = &config.scene {
        scenes.retain(|s| &s.name == selected);
    } else {
        scenes.retain(|s| s.enabled);
    }

    if scenes.is_empty() {
        tracing::warn!("no scenes to run; check zonehub.toml");
        return Ok(());
    }

    let amplifier = Arc::new(seed_amplifier(&scenes));
    let event_bus = InProcessEventBus::new(64);
    let sequencer = ActivationSequencer::new(Arc::clone(&amplifier), event_bus)
        .with_settle_delay(config.settle());

    for scene in &scenes {
        tracing::info!(scene = %scene.name, "activating scene");
        sequencer
            .activate(&scene.request)
            .await
            .with_context(|| format!("scene `{}` failed", scene.name))?;

        for target in &scene.request.zones {
            if let Some(state) = amplifier.zone_state(&target.zone) {
                tracing::info!(
                    zone = %target.zone,
                    volume = %state.volume,
                    muted = state.muted,
                    "zone active",
                );
            }
        }
    }

    Ok(())
}

/// Register every entity the scenes reference with the simulated amplifier.
///
/// Discovery of real entities is the platform's concern; the scenes are the
/// validated list of identifiers the caller supplied.
fn seed_amplifier(scenes: &[Scene]) -> VirtualAmplifier {
    let mut amplifier = VirtualAmplifier::new();
    for scene in scenes {
        amplifier = amplifier
            .with_source(scene.request.source.as_str())
            .with_stream(scene.request.stream.as_str());
        for target in &scene.request.zones {
            amplifier = amplifier.with_zone(target.zone.as_str());
        }
    }
    amplifier
}
