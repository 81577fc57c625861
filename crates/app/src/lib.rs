//! # zonehub-app
//!
//! Application layer — the activation sequencer and **port definitions**
//! (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `MediaController` — the command-issuing interface of the external
//!     platform (`select_source`, `set_volume`, `set_mute`)
//!   - `EventPublisher` — fire-and-forget lifecycle events
//! - Provide the **ActivationSequencer** — the two-pass connect-then-unmute
//!   orchestration over a `MediaController`
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `zonehub-domain` only (plus `tokio::sync`/`tokio::time` for
//! channels and the optional settle delay). Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod sequencer;
