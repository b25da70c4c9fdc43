//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the notifier to external systems:
//! - `http` - Registration backend delivery over HTTP
//! - `directory` - User directory implementations (in-memory)
//! - `events` - Event source implementations (in-memory)

pub mod directory;
pub mod events;
pub mod http;

pub use directory::InMemoryUserDirectory;
pub use events::InMemoryEventSource;
pub use http::HttpRegistrationNotifier;
