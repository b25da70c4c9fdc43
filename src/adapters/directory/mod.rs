//! User directory adapters.
//!
//! - `InMemoryUserDirectory` - Realm-scoped in-memory directory for tests and embedding

mod in_memory;

pub use in_memory::InMemoryUserDirectory;
