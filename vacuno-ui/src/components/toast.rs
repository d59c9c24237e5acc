//! Toast Notification Component
//!
//! Success toasts and inline error messages.

use leptos::*;

use crate::state::use_app_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="fixed bottom-8 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Inline form error; renders nothing when `message` is `None`
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        message.get().map(|msg| view! {
            <div class="bg-red-900/50 border border-red-700 text-red-200 px-4 py-3 rounded-lg text-sm">
                {msg}
            </div>
        })
    }
}
