//! # zonehub-adapter-virtual
//!
//! Virtual/demo adapter that simulates a multizone amplifier for testing and
//! demonstration purposes.
//!
//! The amplifier is seeded with the source, stream, and zone identifiers it
//! should recognise — discovery and validation of real entities is the
//! caller's concern. It then behaves like the device side of the platform:
//! commands addressed to unknown identifiers fail with `NotFound`, accepted
//! commands mutate the simulated state idempotently, and every accepted
//! command lands in a log so tests can assert exact sequences.
//!
//! ## Dependency rule
//!
//! Depends on `zonehub-app` (port traits) and `zonehub-domain` only.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use zonehub_app::ports::MediaController;
use zonehub_domain::command::MediaCommand;
use zonehub_domain::error::{NotFoundError, ZonehubError};
use zonehub_domain::id::{SourceId, StreamId, ZoneId};
use zonehub_domain::volume::Volume;

/// Reserved source value that disconnects a target instead of binding it.
pub const DISCONNECTED: &str = "none";

/// Simulated per-zone state, mirroring what the real device tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneState {
    pub volume: Volume,
    pub muted: bool,
    pub source: Option<SourceId>,
}

impl Default for ZoneState {
    fn default() -> Self {
        Self {
            volume: Volume::DEFAULT,
            muted: false,
            source: None,
        }
    }
}

#[derive(Debug, Default)]
struct AmpState {
    /// Stream currently bound to each known source input.
    inputs: HashMap<SourceId, Option<StreamId>>,
    zones: HashMap<ZoneId, ZoneState>,
    streams: HashSet<StreamId>,
    issued: Vec<MediaCommand>,
}

/// A simulated multizone amplifier.
#[derive(Debug, Default)]
pub struct VirtualAmplifier {
    state: Mutex<AmpState>,
}

impl VirtualAmplifier {
    /// Create an amplifier that recognises no entities yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source input.
    #[must_use]
    pub fn with_source(self, id: impl Into<SourceId>) -> Self {
        self.lock().inputs.insert(id.into(), None);
        self
    }

    /// Register a bindable stream.
    #[must_use]
    pub fn with_stream(self, id: impl Into<StreamId>) -> Self {
        self.lock().streams.insert(id.into());
        self
    }

    /// Register an output zone with default state.
    #[must_use]
    pub fn with_zone(self, id: impl Into<ZoneId>) -> Self {
        self.lock().zones.insert(id.into(), ZoneState::default());
        self
    }

    /// Snapshot of a zone's simulated state.
    #[must_use]
    pub fn zone_state(&self, zone: &ZoneId) -> Option<ZoneState> {
        self.lock().zones.get(zone).cloned()
    }

    /// The stream currently bound to a source, if the source is known.
    #[must_use]
    pub fn source_input(&self, source: &SourceId) -> Option<Option<StreamId>> {
        self.lock().inputs.get(source).cloned()
    }

    /// Whether this amplifier recognises the given zone.
    #[must_use]
    pub fn knows_zone(&self, zone: &ZoneId) -> bool {
        self.lock().zones.contains_key(zone)
    }

    /// Every command accepted so far, in issue order.
    #[must_use]
    pub fn issued_commands(&self) -> Vec<MediaCommand> {
        self.lock().issued.clone()
    }

    fn lock(&self) -> MutexGuard<'_, AmpState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply_select_source(&self, target: &str, source: &str) -> Result<(), ZonehubError> {
        let mut state = self.lock();

        let source_target = SourceId::new(target);
        if state.inputs.contains_key(&source_target) {
            let bound = if source == DISCONNECTED {
                None
            } else {
                let stream = StreamId::new(source);
                if !state.streams.contains(&stream) {
                    return Err(NotFoundError {
                        entity: "Stream",
                        id: source.to_string(),
                    }
                    .into());
                }
                Some(stream)
            };
            state.inputs.insert(source_target, bound);
        } else {
            let zone_target = ZoneId::new(target);
            if !state.zones.contains_key(&zone_target) {
                return Err(NotFoundError {
                    entity: "Target",
                    id: target.to_string(),
                }
                .into());
            }
            let connected = if source == DISCONNECTED {
                None
            } else {
                let source_id = SourceId::new(source);
                if !state.inputs.contains_key(&source_id) {
                    return Err(NotFoundError {
                        entity: "Source",
                        id: source.to_string(),
                    }
                    .into());
                }
                Some(source_id)
            };
            if let Some(zone) = state.zones.get_mut(&zone_target) {
                zone.source = connected;
            }
        }

        state.issued.push(MediaCommand::SelectSource {
            target: target.to_string(),
            source: source.to_string(),
        });
        Ok(())
    }

    fn apply_set_volume(&self, zone: &ZoneId, level: Volume) -> Result<(), ZonehubError> {
        let mut state = self.lock();
        let Some(zone_state) = state.zones.get_mut(zone) else {
            return Err(NotFoundError {
                entity: "Zone",
                id: zone.to_string(),
            }
            .into());
        };
        zone_state.volume = level;
        state.issued.push(MediaCommand::SetVolume {
            target: zone.clone(),
            level,
        });
        Ok(())
    }

    fn apply_set_mute(&self, zone: &ZoneId, muted: bool) -> Result<(), ZonehubError> {
        let mut state = self.lock();
        let Some(zone_state) = state.zones.get_mut(zone) else {
            return Err(NotFoundError {
                entity: "Zone",
                id: zone.to_string(),
            }
            .into());
        };
        zone_state.muted = muted;
        state.issued.push(MediaCommand::SetMute {
            target: zone.clone(),
            muted,
        });
        Ok(())
    }
}

impl MediaController for VirtualAmplifier {
    fn select_source(
        &self,
        target: &str,
        source: &str,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send {
        let result = self.apply_select_source(target, source);
        async { result }
    }

    fn set_volume(
        &self,
        zone: &ZoneId,
        level: Volume,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send {
        let result = self.apply_set_volume(zone, level);
        async { result }
    }

    fn set_mute(
        &self,
        zone: &ZoneId,
        muted: bool,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send {
        let result = self.apply_set_mute(zone, muted);
        async { result }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amplifier() -> VirtualAmplifier {
        VirtualAmplifier::new()
            .with_source("source_1")
            .with_stream("spotify")
            .with_zone("kitchen")
            .with_zone("living_room")
    }

    #[tokio::test]
    async fn should_bind_stream_to_known_source() {
        let amp = amplifier();
        amp.select_source("source_1", "spotify").await.unwrap();
        assert_eq!(
            amp.source_input(&SourceId::new("source_1")),
            Some(Some(StreamId::new("spotify")))
        );
    }

    #[tokio::test]
    async fn should_connect_zone_to_known_source() {
        let amp = amplifier();
        amp.select_source("kitchen", "source_1").await.unwrap();
        let state = amp.zone_state(&ZoneId::new("kitchen")).unwrap();
        assert_eq!(state.source, Some(SourceId::new("source_1")));
    }

    #[tokio::test]
    async fn should_disconnect_when_source_value_is_none() {
        let amp = amplifier();
        amp.select_source("source_1", "spotify").await.unwrap();
        amp.select_source("kitchen", "source_1").await.unwrap();

        amp.select_source("source_1", DISCONNECTED).await.unwrap();
        amp.select_source("kitchen", DISCONNECTED).await.unwrap();

        assert_eq!(amp.source_input(&SourceId::new("source_1")), Some(None));
        let state = amp.zone_state(&ZoneId::new("kitchen")).unwrap();
        assert_eq!(state.source, None);
    }

    #[tokio::test]
    async fn should_set_volume_and_mute_on_known_zone() {
        let amp = amplifier();
        let kitchen = ZoneId::new("kitchen");

        amp.set_volume(&kitchen, Volume::try_new(0.3).unwrap())
            .await
            .unwrap();
        amp.set_mute(&kitchen, true).await.unwrap();

        let state = amp.zone_state(&kitchen).unwrap();
        assert_eq!(state.volume.value(), 0.3);
        assert!(state.muted);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_target() {
        let amp = amplifier();
        let result = amp.select_source("garage", "source_1").await;
        assert!(matches!(result, Err(ZonehubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_stream() {
        let amp = amplifier();
        let result = amp.select_source("source_1", "fm_radio").await;
        assert!(matches!(result, Err(ZonehubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_zone_binds_unknown_source() {
        let amp = amplifier();
        let result = amp.select_source("kitchen", "source_9").await;
        assert!(matches!(result, Err(ZonehubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_zone_volume() {
        let amp = amplifier();
        let result = amp
            .set_volume(&ZoneId::new("garage"), Volume::DEFAULT)
            .await;
        assert!(matches!(result, Err(ZonehubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_not_log_rejected_commands() {
        let amp = amplifier();
        let _ = amp.select_source("garage", "source_1").await;
        let _ = amp.set_mute(&ZoneId::new("garage"), true).await;
        assert!(amp.issued_commands().is_empty());
    }

    #[tokio::test]
    async fn should_log_accepted_commands_in_issue_order() {
        let amp = amplifier();
        let kitchen = ZoneId::new("kitchen");

        amp.select_source("source_1", "spotify").await.unwrap();
        amp.set_volume(&kitchen, Volume::DEFAULT).await.unwrap();
        amp.set_mute(&kitchen, true).await.unwrap();

        let issued = amp.issued_commands();
        assert_eq!(issued.len(), 3);
        assert!(matches!(issued[0], MediaCommand::SelectSource { .. }));
        assert!(matches!(issued[1], MediaCommand::SetVolume { .. }));
        assert!(matches!(issued[2], MediaCommand::SetMute { .. }));
    }

    #[tokio::test]
    async fn should_apply_repeated_commands_idempotently() {
        let amp = amplifier();
        let kitchen = ZoneId::new("kitchen");

        for _ in 0..2 {
            amp.select_source("source_1", "spotify").await.unwrap();
            amp.set_volume(&kitchen, Volume::try_new(0.4).unwrap())
                .await
                .unwrap();
            amp.set_mute(&kitchen, false).await.unwrap();
            amp.select_source("kitchen", "source_1").await.unwrap();
        }

        let state = amp.zone_state(&kitchen).unwrap();
        assert_eq!(state.volume.value(), 0.4);
        assert!(!state.muted);
        assert_eq!(state.source, Some(SourceId::new("source_1")));
        assert_eq!(amp.issued_commands().len(), 8);
    }

    #[tokio::test]
    async fn should_track_known_zones() {
        let amp = amplifier();
        assert!(amp.knows_zone(&ZoneId::new("kitchen")));
        assert!(!amp.knows_zone(&ZoneId::new("garage")));
    }
}
