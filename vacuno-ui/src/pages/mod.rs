//! Pages
//!
//! Top-level page components for each route.

pub mod cattle_list;
pub mod dashboard;
pub mod login;

pub use cattle_list::CattleList;
pub use dashboard::Dashboard;
pub use login::Login;
