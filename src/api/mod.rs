//! REST API Layer
//!
//! Typed clients for the Vacuno backend.
//!
//! ## Architecture
//!
//! - **Transport**: one HTTP exchange, implemented per platform
//!   (reqwest natively, gloo-net in the browser)
//! - **ApiClient**: attaches the session's bearer token and maps
//!   non-success responses to [`ApiError`]
//! - **AuthClient** / **CattleClient**: one method per endpoint
//!
//! ## Endpoints
//!
//! ### Auth
//! - `POST /auth/login` - Exchange credentials for a token
//! - `POST /auth/register` - Create an account (role `field`)
//! - `GET /auth/me` - Current account
//!
//! ### Cattle
//! - `GET /cattle?estado=` - List, optionally filtered by status
//! - `GET /cattle/{id}` - Fetch one record
//! - `POST /cattle` - Create
//! - `PUT /cattle/{id}` - Partial update
//! - `DELETE /cattle/{id}` - Delete
//! - `POST /cattle/health-records` - Record a health event
//! - `POST /cattle/weight-records` - Record a weighing
//!
//! ### Health
//! - `GET /health` - Backend liveness

mod auth;
mod cattle;
mod client;
mod error;
#[cfg(feature = "native")]
mod http;
mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthClient;
pub use cattle::CattleClient;
pub use client::ApiClient;
pub use error::{extract_detail, ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
