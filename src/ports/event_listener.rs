//! EventListener port - Callbacks the host platform invokes per event.
//!
//! The host owns dispatch. It calls a registered listener once per event,
//! from whatever task or thread it likes, possibly concurrently.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::lifecycle::{AdminEvent, LifecycleEvent};

/// Listener for events emitted by the host platform.
///
/// Entry points return `()`: a listener handles its own failures, since an
/// error escaping into the host's dispatch loop could disturb delivery of
/// unrelated events.
#[async_trait]
pub trait EventListener: Send + Sync {
    /// Called once per user-facing lifecycle event.
    async fn on_event(&self, event: &LifecycleEvent);

    /// Called once per administrative event.
    ///
    /// `include_representation` tells whether the host attached the changed
    /// resource's representation.
    async fn on_admin_event(&self, event: &AdminEvent, include_representation: bool);

    /// Called when the host discards the listener.
    fn close(&self) {}

    /// Listener name for logging.
    fn name(&self) -> &'static str;
}

/// Host-side capability to register listeners.
pub trait EventSource: Send + Sync {
    /// Register a listener to receive every subsequent event.
    fn register(&self, listener: Arc<dyn EventListener>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_listener_object_safe(_: &dyn EventListener) {}

    #[allow(dead_code)]
    fn assert_source_object_safe(_: &dyn EventSource) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn event_listener_is_send_sync() {
        #[allow(dead_code)]
        fn check<T: EventListener>() {
            assert_send_sync::<T>();
        }
    }

    #[test]
    fn event_source_is_send_sync() {
        #[allow(dead_code)]
        fn check<T: EventSource>() {
            assert_send_sync::<T>();
        }
    }
}
