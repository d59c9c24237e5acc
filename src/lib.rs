//! # Vacuno
//!
//! Livestock management client for the Vacuno cattle API: session handling,
//! typed REST clients and framework-independent screen state shared by the
//! CLI and the browser app.
//!
//! ## Features
//!
//! - **Session**: one bearer token, injected store (memory, file, localStorage)
//! - **Typed clients**: auth and cattle endpoints over a pluggable transport
//! - **Screen state**: login/register, cattle list, dashboard and navigation
//!
//! ## Modules
//!
//! - [`session`]: token storage and the shared session context
//! - [`api`]: transport seam, error taxonomy, auth and cattle clients
//! - [`models`]: request/response types
//! - [`views`]: screen state machines
//! - [`config`]: TOML + environment configuration (native only)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use std::time::Duration;
//! use vacuno::api::{ApiClient, AuthClient, CattleClient, ReqwestTransport};
//! use vacuno::session::SessionContext;
//! use vacuno::views::DashboardView;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = ReqwestTransport::new("http://localhost:8000", Duration::from_secs(30))?;
//!     let api = ApiClient::new(Rc::new(transport), SessionContext::in_memory());
//!
//!     AuthClient::new(api.clone())
//!         .login("ana@example.com", "secreto123")
//!         .await?;
//!
//!     let mut dashboard = DashboardView::new();
//!     dashboard.load(&CattleClient::new(api)).await;
//!     println!("{} head, {} sick", dashboard.stats.total, dashboard.stats.sick);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
pub mod models;
pub mod session;
pub mod views;

// Re-export top-level types for convenience
pub use api::{ApiClient, ApiError, ApiResult, AuthClient, CattleClient, Transport};

#[cfg(feature = "native")]
pub use api::ReqwestTransport;

pub use models::{Animal, CattleCreate, CattleUpdate, Estado, Sexo, Token, UserRecord};

pub use session::{MemorySessionStore, SessionContext, SessionStore};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig};

pub use views::{CattleListView, DashboardView, LoginView, Route};
