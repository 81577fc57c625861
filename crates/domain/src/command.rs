//! The media command vocabulary issued to the external platform.
//!
//! Commands are plain data: the application layer decides *which* commands to
//! issue and in *what order*, while an adapter behind the
//! `MediaController` port carries them out. Keeping them as values also lets
//! tests assert on exact call sequences.

use serde::{Deserialize, Serialize};

use crate::id::ZoneId;
use crate::volume::Volume;

/// A single operation addressed to an external entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaCommand {
    /// Bind an input to a target: a stream to a source, or a source to a zone.
    ///
    /// The `target` is an entity identifier; whether it names a source or a
    /// zone is resolved by the executing layer, exactly as the platform's
    /// `select_source` service call behaves.
    SelectSource { target: String, source: String },
    /// Set a zone's playback level.
    SetVolume { target: ZoneId, level: Volume },
    /// Mute or unmute a zone.
    SetMute { target: ZoneId, muted: bool },
}

impl std::fmt::Display for MediaCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelectSource { target, source } => {
                write!(f, "select_source({target}, {source})")
            }
            Self::SetVolume { target, level } => write!(f, "set_volume({target}, {level})"),
            Self::SetMute { target, muted } => write!(f, "set_mute({target}, {muted})"),
        }
    }
}
