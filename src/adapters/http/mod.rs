//! HTTP adapters.
//!
//! - `HttpRegistrationNotifier` - POSTs user records to the registration backend

mod registration_notifier;

pub use registration_notifier::HttpRegistrationNotifier;
