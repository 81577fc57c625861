//! Activation sequencer — turns a group of zones on in unison.
//!
//! Activating several zones naively makes them pop on one after another as
//! each command lands. The sequencer avoids that by splitting the run into
//! two passes over the zone list: pass 1 *prepares* every zone (set its
//! level, mute it, connect it to the source) and only after every zone is
//! prepared does pass 2 unmute them. The gap between the first and last
//! audible zone is then a single command round-trip instead of a whole
//! prepare sequence.
//!
//! Commands are issued strictly sequentially, in input order. The only
//! ordering guarantee that matters is the barrier between the passes: no
//! zone is unmuted while any zone's prepare sequence is incomplete.

use std::time::Duration;

use zonehub_domain::activation::{ActivationRequest, ZoneTarget};
use zonehub_domain::error::ZonehubError;
use zonehub_domain::event::{Event, EventType};
use zonehub_domain::id::SourceId;

use crate::ports::{EventPublisher, MediaController};

/// Orchestrates the two-pass connect-then-unmute sequence over a
/// [`MediaController`].
pub struct ActivationSequencer<C, P> {
    controller: C,
    publisher: P,
    settle: Duration,
}

impl<C, P> ActivationSequencer<C, P>
where
    C: MediaController,
    P: EventPublisher,
{
    /// Create a new sequencer with no settle delay.
    pub fn new(controller: C, publisher: P) -> Self {
        Self {
            controller,
            publisher,
            settle: Duration::ZERO,
        }
    }

    /// Wait this long between the prepare and commit passes.
    ///
    /// Some hardware needs a moment to finish switching inputs before
    /// unmuting sounds clean. The delay sits *between* the passes; it never
    /// replaces the barrier.
    #[must_use]
    pub fn with_settle_delay(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Run one activation: bind the stream, prepare every zone, then unmute
    /// them all.
    ///
    /// The zones list may be empty, in which case only the stream binding is
    /// issued. Commands go out strictly in input order; a failed command
    /// aborts the run and propagates — no retries, no cleanup. Zones already
    /// prepared stay muted until a later successful run unmutes them.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an invalid request, or whatever the
    /// [`MediaController`] reports for a failed command.
    pub async fn activate(&self, request: &ActivationRequest) -> Result<(), ZonehubError> {
        request.validate()?;

        tracing::info!(
            source = %request.source,
            stream = %request.stream,
            zones = request.zones.len(),
            "starting zone activation",
        );
        let started = Event::new(
            EventType::ActivationStarted,
            None,
            serde_json::json!({
                "source": request.source,
                "stream": request.stream,
                "zones": request.zones.len(),
            }),
        );
        let _ = self.publisher.publish(started).await;

        // Step A: bind the stream to the source. Always issued, even when
        // there are no zones to activate.
        self.controller
            .select_source(request.source.as_str(), request.stream.as_str())
            .await?;

        // Pass 1: every zone reaches "prepared" (level set, muted, connected)
        // before anything becomes audible.
        for target in &request.zones {
            self.prepare_zone(&request.source, target).await?;
        }

        if !self.settle.is_zero() {
            tokio::time::sleep(self.settle).await;
        }

        // Pass 2: commit. All prepare sequences are complete, so unmuting in
        // order is inaudible as a stagger.
        for target in &request.zones {
            self.controller.set_mute(&target.zone, false).await?;
        }

        tracing::info!(zones = request.zones.len(), "zone activation complete");
        let completed = Event::new(
            EventType::ActivationCompleted,
            None,
            serde_json::json!({"zones": request.zones.len()}),
        );
        let _ = self.publisher.publish(completed).await;

        Ok(())
    }

    /// Issue one zone's prepare sequence: volume, mute, connect — in that
    /// order, so the zone can never be audible mid-preparation.
    async fn prepare_zone(
        &self,
        source: &SourceId,
        target: &ZoneTarget,
    ) -> Result<(), ZonehubError> {
        self.controller
            .set_volume(&target.zone, target.volume)
            .await?;
        self.controller.set_mute(&target.zone, true).await?;
        self.controller
            .select_source(target.zone.as_str(), source.as_str())
            .await?;

        tracing::debug!(zone = %target.zone, volume = %target.volume, "zone prepared");
        let prepared = Event::new(
            EventType::ZonePrepared,
            Some(target.zone.clone()),
            serde_json::json!({"volume": target.volume}),
        );
        let _ = self.publisher.publish(prepared).await;
        Ok(())
    }
}
