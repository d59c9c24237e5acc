//! Session store contract and the in-memory backend.

use std::cell::RefCell;

/// Well-known key the token lives under
pub const TOKEN_KEY: &str = "token";

/// Persistent key-value storage holding at most one token.
///
/// Storage is assumed always available; backends log their own failures
/// instead of surfacing them.
pub trait SessionStore {
    /// Write the token, replacing any previous one
    fn save(&self, token: &str);

    /// Currently stored token
    fn read(&self) -> Option<String>;

    /// Remove the token
    fn clear(&self);
}

/// Process-local store, lost on exit
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn read(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
