//! Domain layer containing the notifier's types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors)
//! - `lifecycle` - Lifecycle and admin events observed from the host
//! - `user` - Directory accounts and the projected `UserRecord`
//! - `notification` - Delivery outcome classification

pub mod foundation;
pub mod lifecycle;
pub mod notification;
pub mod user;
