//! Application handlers.
//!
//! Listeners that react to host lifecycle events by orchestrating the
//! directory and notifier ports.

pub mod registration;

pub use registration::{RegistrationListener, RegistrationListenerFactory, UserRecordProjector};
