//! Registration event handling.

mod factory;
mod listener;
mod projector;

pub use factory::RegistrationListenerFactory;
pub use listener::RegistrationListener;
pub use projector::UserRecordProjector;
