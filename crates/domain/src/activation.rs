//! Activation request — the input to the zone activation sequencer.
//!
//! A request names a source, the stream to bind to it, and an ordered list of
//! zone targets. The zones list may be empty: the stream is bound to the
//! source either way, and the per-zone passes are simply skipped.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ZonehubError};
use crate::id::{SourceId, StreamId, ZoneId};
use crate::volume::Volume;

/// A zone to activate, with its desired playback level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTarget {
    pub zone: ZoneId,
    pub volume: Volume,
}

/// Everything needed to turn on a group of zones in unison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivationRequest {
    pub source: SourceId,
    pub stream: StreamId,
    pub zones: Vec<ZoneTarget>,
}

impl ActivationRequest {
    /// Create a builder for constructing an [`ActivationRequest`].
    #[must_use]
    pub fn builder() -> ActivationRequestBuilder {
        ActivationRequestBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ZonehubError::Validation`] when:
    /// - `source`, `stream`, or any zone reference is empty
    ///   ([`ValidationError::EmptyReference`])
    /// - the same zone appears more than once
    ///   ([`ValidationError::DuplicateZone`]) — two prepare sequences for one
    ///   zone would interleave with its own unmute and break per-zone call
    ///   ordering
    pub fn validate(&self) -> Result<(), ZonehubError> {
        if self.source.is_empty() {
            return Err(ValidationError::EmptyReference("source").into());
        }
        if self.stream.is_empty() {
            return Err(ValidationError::EmptyReference("stream").into());
        }
        for (index, target) in self.zones.iter().enumerate() {
            if target.zone.is_empty() {
                return Err(ValidationError::EmptyReference("zone").into());
            }
            if self.zones[..index].iter().any(|t| t.zone == target.zone) {
                return Err(ValidationError::DuplicateZone(target.zone.clone()).into());
            }
        }
        Ok(())
    }
}

/// Step-by-step builder for [`ActivationRequest`].
#[derive(Debug, Default)]
pub struct ActivationRequestBuilder {
    source: Option<SourceId>,
    stream: Option<StreamId>,
    zones: Vec<ZoneTarget>,
}

impl ActivationRequestBuilder {
    #[must_use]
    pub fn source(mut self, source: impl Into<SourceId>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn stream(mut self, stream: impl Into<StreamId>) -> Self {
        self.stream = Some(stream.into());
        self
    }

    /// Append a zone at an explicit level. Order is preserved.
    #[must_use]
    pub fn zone(mut self, zone: impl Into<ZoneId>, volume: Volume) -> Self {
        self.zones.push(ZoneTarget {
            zone: zone.into(),
            volume,
        });
        self
    }

    /// Append a zone at the default level.
    #[must_use]
    pub fn zone_at_default(self, zone: impl Into<ZoneId>) -> Self {
        self.zone(zone, Volume::DEFAULT)
    }

    /// Consume the builder, validate, and return an [`ActivationRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`ZonehubError::Validation`] if required references are missing
    /// or a zone is duplicated.
    pub fn build(self) -> Result<ActivationRequest, ZonehubError> {
        let request = ActivationRequest {
            source: self.source.unwrap_or_default(),
            stream: self.stream.unwrap_or_default(),
            zones: self.zones,
        };
        request.validate()?;
        Ok(request)
    }
}
