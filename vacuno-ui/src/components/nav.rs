//! Navigation Component
//!
//! Header bar; the links depend on whether a session exists.

use leptos::*;
use leptos_router::*;
use vacuno::views::{logout, nav_items, NavItem};

use crate::state::use_app_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let on_logout = {
        let state = state.clone();
        move |_: ev::MouseEvent| {
            let route = logout(&state.session);
            state.sync_session();
            navigate(route.path(), Default::default());
        }
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🐄"</span>
                        <span class="text-xl font-bold text-white">"Vacuno"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {move || {
                            // re-run when the session changes
                            let _ = state.authenticated.get();

                            nav_items(&state.session)
                                .into_iter()
                                .map(|item| match item {
                                    NavItem::Link { label, route } => view! {
                                        <NavLink href=route.path() label=label />
                                    }
                                    .into_view(),
                                    NavItem::Logout { label } => {
                                        let on_logout = on_logout.clone();
                                        view! {
                                            <button
                                                on:click=on_logout
                                                class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                            >
                                                {label}
                                            </button>
                                        }
                                        .into_view()
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
