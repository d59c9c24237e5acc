//! Routes and the navigation bar.

use crate::session::SessionContext;

/// Screens reachable by path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Cattle,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Cattle => "/cattle",
        }
    }
}

/// One entry of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Link { label: &'static str, route: Route },
    Logout { label: &'static str },
}

impl NavItem {
    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Link { label, .. } | NavItem::Logout { label } => label,
        }
    }
}

/// Items to show for the current session
pub fn nav_items(session: &SessionContext) -> Vec<NavItem> {
    if session.is_authenticated() {
        vec![
            NavItem::Link {
                label: "Dashboard",
                route: Route::Dashboard,
            },
            NavItem::Link {
                label: "Ganado",
                route: Route::Cattle,
            },
            NavItem::Logout { label: "Salir" },
        ]
    } else {
        vec![NavItem::Link {
            label: "Login",
            route: Route::Login,
        }]
    }
}

/// Clear the session; the caller navigates to the returned route
pub fn logout(session: &SessionContext) -> Route {
    session.clear();
    tracing::info!("Logged out");
    Route::Login
}
