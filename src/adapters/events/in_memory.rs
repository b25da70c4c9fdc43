//! In-memory event source for tests and embedding.
//!
//! Stands in for the host platform's dispatcher: listeners register with
//! it and every emitted event is handed to each of them in registration
//! order.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::domain::lifecycle::{AdminEvent, LifecycleEvent, LifecycleEventType};
use crate::ports::{EventListener, EventSource};

/// In-memory event source.
///
/// Features:
/// - Sequential delivery to every registered listener (deterministic for tests)
/// - Bounded capture of emitted events for assertions (oldest dropped first)
///
/// Lock poisoning is recovered from rather than propagated; every write
/// leaves the guarded data consistent.
///
/// # Example
///
/// ```ignore
/// let source = InMemoryEventSource::new();
/// source.register(Arc::new(listener));
///
/// source.emit(LifecycleEvent::registration(realm_id, user_id)).await;
///
/// assert_eq!(source.event_count(), 1);
/// assert!(source.has_event(&LifecycleEventType::Register));
/// ```
pub struct InMemoryEventSource {
    listeners: RwLock<Vec<Arc<dyn EventListener>>>,
    emitted: RwLock<VecDeque<LifecycleEvent>>,
    capture_limit: usize,
}

impl InMemoryEventSource {
    /// Number of emitted events retained by [`new`](Self::new).
    pub const DEFAULT_CAPTURE_LIMIT: usize = 1024;

    /// Creates a source with no listeners.
    pub fn new() -> Self {
        Self::with_capture_limit(Self::DEFAULT_CAPTURE_LIMIT)
    }

    /// Creates a source that retains at most `limit` emitted events.
    pub fn with_capture_limit(limit: usize) -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
            emitted: RwLock::new(VecDeque::new()),
            capture_limit: limit,
        }
    }

    /// Hands a lifecycle event to every registered listener.
    pub async fn emit(&self, event: LifecycleEvent) {
        // Release the lock before awaiting listeners
        {
            let mut emitted = self.emitted.write().unwrap_or_else(|e| e.into_inner());
            emitted.push_back(event.clone());
            while emitted.len() > self.capture_limit {
                emitted.pop_front();
            }
        }

        for listener in self.snapshot() {
            listener.on_event(&event).await;
        }
    }

    /// Hands an admin event to every registered listener.
    pub async fn emit_admin(&self, event: AdminEvent, include_representation: bool) {
        for listener in self.snapshot() {
            listener.on_admin_event(&event, include_representation).await;
        }
    }

    /// Closes and unregisters every listener.
    pub fn close_all(&self) {
        let listeners: Vec<_> = self
            .listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .drain(..)
            .collect();
        for listener in listeners {
            listener.close();
        }
    }

    // === Test Helpers ===

    /// Returns the retained lifecycle events, oldest first.
    pub fn emitted_events(&self) -> Vec<LifecycleEvent> {
        self.emitted
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Returns count of retained lifecycle events.
    pub fn event_count(&self) -> usize {
        self.emitted.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Checks if a retained event has the given type.
    pub fn has_event(&self, event_type: &LifecycleEventType) -> bool {
        self.emitted
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|e| &e.event_type == event_type)
    }

    /// Returns count of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn snapshot(&self) -> Vec<Arc<dyn EventListener>> {
        self.listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Default for InMemoryEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for InMemoryEventSource {
    fn register(&self, listener: Arc<dyn EventListener>) {
        tracing::debug!(listener = listener.name(), "Registering event listener");
        self.listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(listener);
    }
}
