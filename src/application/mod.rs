//! Application layer - Listeners and their factory.
//!
//! This layer turns host events into port calls. It owns no I/O itself.

pub mod handlers;

pub use handlers::{RegistrationListener, RegistrationListenerFactory, UserRecordProjector};
