//! Event bus port — publish/subscribe for activation lifecycle events.

use std::future::Future;

use zonehub_domain::error::ZonehubError;
use zonehub_domain::event::Event;

/// Publishes lifecycle events to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), ZonehubError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), ZonehubError>> + Send {
        (**self).publish(event)
    }
}
