//! Screen State
//!
//! Framework-independent view models for each screen. Both front ends (the
//! CLI and the Leptos app) drive these; neither owns any screen logic.
//!
//! Every screen follows the same shape:
//!
//! - controlled-input setters write into a local draft
//! - `begin_*` validates and returns the request to dispatch, or records an
//!   inline error and returns `None` (nothing is sent)
//! - `finish_*` folds the response back in and always clears `loading`
//! - an `async` driver chains the two around a client call
//!
//! ## Screens
//!
//! - [`LoginView`]: login, registration and register-then-login
//! - [`CattleListView`]: searchable, status-filtered list with create/delete
//! - [`DashboardView`]: herd counts, average weight, recent records
//! - [`shell`]: routes and the session-dependent navigation

pub mod cattle_list;
pub mod dashboard;
pub mod login;
pub mod messages;
pub mod shell;

pub use cattle_list::{filter_cattle, CattleDraft, CattleListView, DeleteOutcome, DraftField};
pub use dashboard::{average_weight, DashboardStats, DashboardView, RECENT_LIMIT};
pub use login::{LoginField, LoginView, RegisterField};
pub use shell::{logout, nav_items, NavItem, Route};
