//! Authentication client.

use super::client::{encode, ApiClient};
use super::error::ApiResult;
use super::transport::Method;
use crate::models::{Credentials, Registration, Token, UserRecord};
use crate::session::SessionContext;

/// Login, registration and logout against `/auth`
#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn session(&self) -> &SessionContext {
        self.api.session()
    }

    /// Exchange credentials for a token and store it, replacing any
    /// previous session
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Token> {
        let body = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = self
            .api
            .request(Method::Post, "/auth/login")
            .json(encode(&body)?);

        let token: Token = self.api.send_json(request).await?;
        self.api.session().set(&token.access_token);
        tracing::info!("Logged in as {}", email);

        Ok(token)
    }

    /// Create an account with the default role. Does not log in.
    pub async fn register(&self, nombre: &str, email: &str, password: &str) -> ApiResult<UserRecord> {
        let body = Registration::new(nombre, email, password);
        let request = self
            .api
            .request(Method::Post, "/auth/register")
            .json(encode(&body)?);

        let user: UserRecord = self.api.send_json(request).await?;
        tracing::info!("Registered account {} ({})", user.email, user.rol);

        Ok(user)
    }

    /// Current account
    pub async fn me(&self) -> ApiResult<UserRecord> {
        self.api
            .send_json(self.api.request(Method::Get, "/auth/me"))
            .await
    }

    pub fn logout(&self) {
        self.api.session().clear();
        tracing::info!("Logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.session().is_authenticated()
    }
}
