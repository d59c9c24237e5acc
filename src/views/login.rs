//! Login and registration screen.
//!
//! `idle → submitting → {success: navigate to the dashboard, failure: idle + error}`.
//! A successful registration copies the new credentials into the login form
//! and chains a login; if that login fails the registration form is shown
//! again, still populated, with the error.

use super::messages;
use super::shell::Route;
use crate::api::{ApiResult, AuthClient};
use crate::models::{Credentials, Registration, Token, UserRecord};

/// Inputs of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Inputs of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Nombre,
    Email,
    Password,
}

/// Registration draft
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDraft {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

/// State of the login screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginView {
    pub email: String,
    pub password: String,
    pub register: RegisterDraft,
    pub show_register: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// Set between a successful registration and the login it triggers
    auto_login: bool,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_login_field(&mut self, field: LoginField, value: &str) {
        match field {
            LoginField::Email => self.email = value.to_string(),
            LoginField::Password => self.password = value.to_string(),
        }
    }

    pub fn set_register_field(&mut self, field: RegisterField, value: &str) {
        match field {
            RegisterField::Nombre => self.register.nombre = value.to_string(),
            RegisterField::Email => self.register.email = value.to_string(),
            RegisterField::Password => self.register.password = value.to_string(),
        }
    }

    pub fn toggle_register(&mut self) {
        self.show_register = !self.show_register;
    }

    /// Validate the login form. `None` means nothing should be sent.
    pub fn begin_login(&mut self) -> Option<Credentials> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some(messages::LOGIN_REQUIRED_FIELDS.to_string());
            self.auto_login = false;
            return None;
        }

        self.loading = true;
        self.error = None;

        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Fold in the login result; `Some` is where to navigate next
    pub fn finish_login(&mut self, result: ApiResult<Token>) -> Option<Route> {
        self.loading = false;
        let chained = std::mem::take(&mut self.auto_login);

        match result {
            Ok(_) => Some(Route::Dashboard),
            Err(e) => {
                self.error = Some(e.user_message(messages::LOGIN_FAILED));
                if chained {
                    self.show_register = true;
                }
                None
            }
        }
    }

    /// Validate the registration form. `None` means nothing should be sent.
    pub fn begin_register(&mut self) -> Option<Registration> {
        let draft = &self.register;
        if draft.nombre.trim().is_empty() || draft.email.trim().is_empty() || draft.password.is_empty() {
            self.error = Some(messages::REGISTER_REQUIRED_FIELDS.to_string());
            return None;
        }
        if draft.password.chars().count() < messages::MIN_PASSWORD_LEN {
            self.error = Some(messages::REGISTER_PASSWORD_TOO_SHORT.to_string());
            return None;
        }

        let registration = Registration::new(&draft.nombre, &draft.email, &draft.password);
        self.loading = true;
        self.error = None;
        Some(registration)
    }

    /// Fold in the registration result. Returns `true` when a login should
    /// follow; the login form then already holds the new credentials.
    pub fn finish_register(&mut self, result: ApiResult<UserRecord>) -> bool {
        self.loading = false;

        match result {
            Ok(user) => {
                tracing::debug!("Registration accepted for {}", user.email);
                self.email = self.register.email.clone();
                self.password = self.register.password.clone();
                self.show_register = false;
                self.auto_login = true;
                true
            }
            Err(e) => {
                self.error = Some(e.user_message(messages::REGISTER_FAILED));
                false
            }
        }
    }

    /// Submit the login form
    pub async fn submit_login(&mut self, auth: &AuthClient) -> Option<Route> {
        let credentials = self.begin_login()?;
        let result = auth.login(&credentials.email, &credentials.password).await;
        self.finish_login(result)
    }

    /// Submit the registration form, then log in with the same credentials
    pub async fn submit_register(&mut self, auth: &AuthClient) -> Option<Route> {
        let registration = self.begin_register()?;
        let result = auth
            .register(&registration.nombre, &registration.email, &registration.password)
            .await;

        if self.finish_register(result) {
            self.submit_login(auth).await
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::api::ApiClient;
    use crate::session::SessionContext;
    use std::rc::Rc;

    fn auth() -> (AuthClient, Rc<RecordingTransport>) {
        let transport = Rc::new(RecordingTransport::new());
        let api = ApiClient::new(transport.clone(), SessionContext::in_memory());
        (AuthClient::new(api), transport)
    }

    fn token(value: &str) -> serde_json::Value {
        serde_json::json!({"access_token": value, "token_type": "bearer"})
    }

    fn user() -> serde_json::Value {
        serde_json::json!({
            "id": "u1", "nombre": "Ana", "email": "ana@example.com",
            "rol": "field", "activo": true
        })
    }

    fn filled_register(view: &mut LoginView) {
        view.toggle_register();
        view.set_register_field(RegisterField::Nombre, "Ana");
        view.set_register_field(RegisterField::Email, "ana@example.com");
        view.set_register_field(RegisterField::Password, "secreto123");
    }

    #[tokio::test]
    async fn test_empty_fields_send_nothing() {
        let (auth, transport) = auth();

        for (email, password) in [("", ""), ("ana@example.com", ""), ("   ", "secreto123")] {
            let mut view = LoginView::new();
            view.set_login_field(LoginField::Email, email);
            view.set_login_field(LoginField::Password, password);

            assert_eq!(view.submit_login(&auth).await, None);
            assert_eq!(view.error.as_deref(), Some(messages::LOGIN_REQUIRED_FIELDS));
            assert!(!view.loading);
        }

        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_login_success_navigates() {
        let (auth, transport) = auth();
        transport.push_json(200, token("tok-1"));

        let mut view = LoginView::new();
        view.set_login_field(LoginField::Email, "ana@example.com");
        view.set_login_field(LoginField::Password, "secreto123");

        assert_eq!(view.submit_login(&auth).await, Some(Route::Dashboard));
        assert_eq!(view.error, None);
        assert!(!view.loading);
        assert_eq!(auth.session().get().as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn test_login_failure_shows_detail_or_generic() {
        let (auth, transport) = auth();
        transport.push_json(401, serde_json::json!({"detail": "Incorrect email or password"}));
        transport.push_raw(500, "Internal Server Error");

        let mut view = LoginView::new();
        view.set_login_field(LoginField::Email, "ana@example.com");
        view.set_login_field(LoginField::Password, "malamala");

        assert_eq!(view.submit_login(&auth).await, None);
        assert_eq!(view.error.as_deref(), Some("Incorrect email or password"));
        assert!(!view.loading);

        assert_eq!(view.submit_login(&auth).await, None);
        assert_eq!(view.error.as_deref(), Some(messages::LOGIN_FAILED));
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let (auth, transport) = auth();
        transport.push_json(201, user());
        transport.push_json(200, token("fresh"));

        let mut view = LoginView::new();
        filled_register(&mut view);

        assert_eq!(view.submit_register(&auth).await, Some(Route::Dashboard));

        let sent = transport.requests();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].path, "/auth/register");
        assert_eq!(sent[1].path, "/auth/login");
        assert_eq!(
            sent[1].body,
            Some(serde_json::json!({"email": "ana@example.com", "password": "secreto123"}))
        );
        assert_eq!(auth.session().get().as_deref(), Some("fresh"));
        assert!(!view.show_register);
    }

    #[tokio::test]
    async fn test_login_failure_after_register_keeps_form() {
        let (auth, transport) = auth();
        transport.push_json(201, user());
        transport.push_json(403, serde_json::json!({"detail": "User account is inactive"}));

        let mut view = LoginView::new();
        filled_register(&mut view);

        assert_eq!(view.submit_register(&auth).await, None);
        assert_eq!(view.error.as_deref(), Some("User account is inactive"));
        assert!(view.show_register);
        assert_eq!(view.register.nombre, "Ana");
        assert_eq!(view.register.email, "ana@example.com");
        assert_eq!(view.register.password, "secreto123");
        assert!(!view.loading);
        assert!(!auth.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_register_failure_skips_login() {
        let (auth, transport) = auth();
        transport.push_json(400, serde_json::json!({"detail": "Email already registered"}));

        let mut view = LoginView::new();
        filled_register(&mut view);

        assert_eq!(view.submit_register(&auth).await, None);
        assert_eq!(view.error.as_deref(), Some("Email already registered"));
        assert_eq!(transport.request_count(), 1);
        assert!(view.email.is_empty());
    }

    #[tokio::test]
    async fn test_register_validation() {
        let (auth, transport) = auth();

        let mut view = LoginView::new();
        view.set_register_field(RegisterField::Nombre, "Ana");
        view.set_register_field(RegisterField::Email, "ana@example.com");
        assert_eq!(view.submit_register(&auth).await, None);
        assert_eq!(view.error.as_deref(), Some(messages::REGISTER_REQUIRED_FIELDS));

        view.set_register_field(RegisterField::Password, "corta");
        assert_eq!(view.submit_register(&auth).await, None);
        assert_eq!(view.error.as_deref(), Some(messages::REGISTER_PASSWORD_TOO_SHORT));

        assert_eq!(transport.request_count(), 0);
    }

    #[test]
    fn test_plain_login_failure_does_not_open_register() {
        let mut view = LoginView::new();
        view.set_login_field(LoginField::Email, "ana@example.com");
        view.set_login_field(LoginField::Password, "secreto123");

        assert!(view.begin_login().is_some());
        assert!(view.loading);
        view.finish_login(Err(crate::api::ApiError::Network("down".into())));
        assert!(!view.show_register);
        assert_eq!(view.error.as_deref(), Some(messages::LOGIN_FAILED));
    }
}
