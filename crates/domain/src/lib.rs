//! # zonehub-domain
//!
//! Pure domain model for the zonehub multi-zone audio controller.
//!
//! ## Responsibilities
//! - Foundational types: entity references, error conventions, timestamps
//! - Define the **Volume** value type (0.0–1.0, 0.01 steps)
//! - Define **ActivationRequests** (source + stream + ordered zone targets)
//! - Define **Scenes** (named, toggleable activation presets)
//! - Define the **MediaCommand** vocabulary issued to the external platform
//! - Define **Events** (activation lifecycle records)
//!
//! Sources, streams, and zones are *external* entities: the platform being
//! automated owns their state, and this crate only references them by
//! identifier.
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod activation;
pub mod command;
pub mod event;
pub mod scene;
pub mod volume;
