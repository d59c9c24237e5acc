//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod status_badge;
pub mod toast;

pub use loading::{InlineLoading, ListSkeleton};
pub use nav::Nav;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use toast::{ErrorMessage, Toast};
