//! State Management
//!
//! Application-wide context and the browser session store.

pub mod global;
pub mod storage;

pub use global::{provide_app_state, use_app_state, AppState};
