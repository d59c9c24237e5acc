//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use vacuno::views::Route as AppRoute;

use crate::components::{Nav, Toast};
use crate::pages::{CattleList, Dashboard, Login};
use crate::state::{provide_app_state, use_app_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide application state to all components
    provide_app_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path=AppRoute::Login.path() /> } />
                        <Route path=AppRoute::Login.path() view=Login />
                        <Route
                            path=AppRoute::Dashboard.path()
                            view=|| view! { <RequireSession><Dashboard /></RequireSession> }
                        />
                        <Route
                            path=AppRoute::Cattle.path()
                            view=|| view! { <RequireSession><CattleList /></RequireSession> }
                        />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Renders its children only with a session; otherwise sends to login
#[component]
fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let state = use_app_state();

    move || {
        if state.authenticated.get() {
            children().into_view()
        } else {
            view! { <Redirect path=AppRoute::Login.path() /> }.into_view()
        }
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Página no encontrada"</h1>
            <p class="text-gray-400 mb-6">"La página que busca no existe."</p>
            <A
                href=AppRoute::Dashboard.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Ir al Dashboard"
            </A>
        </div>
    }
}
