//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the notifier and the outside world. Adapters implement these ports.
//!
//! ## Host Ports
//!
//! - `EventListener` - Callbacks the host invokes per lifecycle/admin event
//! - `EventSource` - Host-side listener registration
//! - `UserDirectory` - Realm-scoped user lookup
//!
//! ## Outbound Ports
//!
//! - `RecordNotifier` - Delivery of a projected user record to the backend

mod event_listener;
mod record_notifier;
mod user_directory;

pub use event_listener::{EventListener, EventSource};
pub use record_notifier::RecordNotifier;
pub use user_directory::UserDirectory;
