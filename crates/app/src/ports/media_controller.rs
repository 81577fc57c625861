//! Media controller port — the command-issuing interface of the external
//! platform.
//!
//! Every mutation the sequencer performs goes through this trait; zonehub
//! holds no device state of its own. Implementations define their own failure
//! semantics (unknown identifier, device unreachable, …) — the sequencer
//! performs no retries and no compensation, it just stops at the first error.

use std::future::Future;

use zonehub_domain::error::ZonehubError;
use zonehub_domain::id::ZoneId;
use zonehub_domain::volume::Volume;

/// Issues media-player commands to entities addressed by identifier.
///
/// `target` in [`select_source`](Self::select_source) may name a source (bind
/// a stream to it) or a zone (connect it to a source) — resolution is the
/// implementation's job, mirroring how the platform's `select_source` service
/// call is addressed.
pub trait MediaController: Send + Sync {
    /// Bind `source` (a stream or source identifier) to `target`.
    fn select_source(
        &self,
        target: &str,
        source: &str,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send;

    /// Set a zone's playback level.
    fn set_volume(
        &self,
        zone: &ZoneId,
        level: Volume,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send;

    /// Mute or unmute a zone.
    fn set_mute(
        &self,
        zone: &ZoneId,
        muted: bool,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send;
}

impl<T: MediaController> MediaController for std::sync::Arc<T> {
    fn select_source(
        &self,
        target: &str,
        source: &str,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send {
        (**self).select_source(target, source)
    }

    fn set_volume(
        &self,
        zone: &ZoneId,
        level: Volume,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send {
        (**self).set_volume(zone, level)
    }

    fn set_mute(
        &self,
        zone: &ZoneId,
        muted: bool,
    ) -> impl Future<Output = Result<(), ZonehubError>> + Send {
        (**self).set_mute(zone, muted)
    }
}
