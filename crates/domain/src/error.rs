//! Common error types used across the workspace.
//!
//! Each layer defines typed errors and converts into [`ZonehubError`] via
//! `#[from]`. The sequencer itself adds no taxonomy of its own: a failed
//! command propagates unchanged, and later steps are simply never issued.

use crate::id::ZoneId;

/// Top-level error for the zonehub workspace.
#[derive(Debug, thiserror::Error)]
pub enum ZonehubError {
    /// A domain invariant was violated while building or validating input.
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// A referenced entity is unknown to the command-executing layer.
    #[error("Not found")]
    NotFound(#[from] NotFoundError),

    /// The external device reported a failure executing a command.
    #[error("Device error")]
    Device(#[from] DeviceError),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A name field was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// An entity reference was empty and can never address anything.
    #[error("{0} reference must not be empty")]
    EmptyReference(&'static str),

    /// The same zone was listed more than once in one request.
    #[error("zone `{0}` is listed more than once")]
    DuplicateZone(ZoneId),

    /// A volume level fell outside the accepted range.
    #[error("volume {0} is outside 0.0..=1.0")]
    VolumeOutOfRange(f64),
}

/// A referenced entity could not be resolved.
#[derive(Debug, thiserror::Error)]
#[error("{entity} `{id}` not found")]
pub struct NotFoundError {
    /// Kind of entity that was looked up (e.g. `"Zone"`).
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}

/// The external command-execution layer rejected a command.
#[derive(Debug, thiserror::Error)]
#[error("command `{command}` failed: {reason}")]
pub struct DeviceError {
    /// Rendered form of the rejected command.
    pub command: String,
    /// Failure description reported by the device layer.
    pub reason: String,
}
