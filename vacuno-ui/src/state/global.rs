//! Global Application State
//!
//! The session, the typed clients sharing it, and a few signals the shell
//! reacts to.

use std::rc::Rc;

use leptos::*;
use vacuno::api::{ApiClient, AuthClient, CattleClient};
use vacuno::session::SessionContext;

use super::storage::LocalStorageSessionStore;
use crate::api::GlooTransport;

/// State provided to all components
#[derive(Clone)]
pub struct AppState {
    pub session: SessionContext,
    pub auth: AuthClient,
    pub cattle: CattleClient,
    /// Mirrors `session.is_authenticated()` so the nav re-renders on change
    pub authenticated: RwSignal<bool>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide application state to the component tree
pub fn provide_app_state() {
    let session = SessionContext::new(Rc::new(LocalStorageSessionStore));
    let api = ApiClient::new(Rc::new(GlooTransport::from_storage()), session.clone());

    let state = AppState {
        authenticated: create_rw_signal(session.is_authenticated()),
        auth: AuthClient::new(api.clone()),
        cattle: CattleClient::new(api),
        session,
        success: create_rw_signal(None),
    };

    provide_context(state);
}

/// Application state from context
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    /// Re-read the session after login or logout
    pub fn sync_session(&self) {
        self.authenticated.set(self.session.is_authenticated());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }
}
