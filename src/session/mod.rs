//! Session Handling
//!
//! A single bearer token held in a persistent key-value store.
//!
//! ## Architecture
//!
//! - **SessionStore**: storage backend (memory, file, browser `localStorage`)
//! - **SessionContext**: cloneable handle injected into clients and screens
//!
//! Presence of a token is the only "logged in" signal; the token is never
//! inspected or refreshed on the client.

mod context;
#[cfg(feature = "native")]
mod file;
mod store;

pub use context::SessionContext;
#[cfg(feature = "native")]
pub use file::FileSessionStore;
pub use store::{MemorySessionStore, SessionStore, TOKEN_KEY};
