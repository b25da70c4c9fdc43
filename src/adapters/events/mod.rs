//! Event source adapters.
//!
//! - `InMemoryEventSource` - In-process dispatcher standing in for the host's event bus

mod in_memory;

pub use in_memory::InMemoryEventSource;
