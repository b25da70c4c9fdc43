//! Lifecycle module - Events observed from the host identity platform.

mod event;
mod event_type;

pub use event::{AdminEvent, AdminOperation, LifecycleEvent};
pub use event_type::LifecycleEventType;
