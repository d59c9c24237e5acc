//! Injected session handle.

use std::fmt;
use std::rc::Rc;

use super::store::{MemorySessionStore, SessionStore};

/// Shared view of the session token.
///
/// Clones point at the same store, so a login performed through one handle is
/// visible to every screen holding another.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Context over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemorySessionStore::new()))
    }

    pub fn set(&self, token: &str) {
        tracing::debug!("Session token stored");
        self.store.save(token);
    }

    pub fn get(&self) -> Option<String> {
        self.store.read().filter(|t| !t.is_empty())
    }

    pub fn clear(&self) {
        tracing::debug!("Session cleared");
        self.store.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
