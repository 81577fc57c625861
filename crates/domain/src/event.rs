//! Event — an immutable record of activation lifecycle progress.
//!
//! Events are observability records, not control flow: the sequencer
//! publishes them fire-and-forget, and a lost event never affects command
//! ordering.

use serde::{Deserialize, Serialize};

use crate::id::{EventId, ZoneId};
use crate::time::{Timestamp, now};

/// What kind of lifecycle progress an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// An activation run began; the stream is about to be bound.
    ActivationStarted,
    /// A zone finished its prepare sequence (volume set, muted, connected).
    ZonePrepared,
    /// All zones are unmuted and the run finished.
    ActivationCompleted,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActivationStarted => f.write_str("activation_started"),
            Self::ZonePrepared => f.write_str("zone_prepared"),
            Self::ActivationCompleted => f.write_str("activation_completed"),
        }
    }
}

/// An activation lifecycle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub event_type: EventType,
    /// The zone this event concerns, when it concerns one.
    pub zone: Option<ZoneId>,
    /// Free-form payload (source, stream, counts, …).
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a new event stamped with the current time.
    #[must_use]
    pub fn new(event_type: EventType, zone: Option<ZoneId>, data: serde_json::Value) -> Self {
        Self {
            id: EventId::new(),
            event_type,
            zone,
            data,
            timestamp: now(),
        }
    }
}
