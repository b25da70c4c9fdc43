//! Notification module - Outcome of delivering a record to the backend.

mod outcome;

pub use outcome::DeliveryOutcome;
