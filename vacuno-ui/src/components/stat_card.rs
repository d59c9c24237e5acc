//! Stat Card Component

use leptos::*;

/// One dashboard figure
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    unit: Option<&'static str>,
    #[prop(default = "text-white")]
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                {unit.map(|u| view! { <span class="text-gray-500 text-xs">{u}</span> })}
            </div>
            <div class=format!("text-3xl font-bold mt-2 {}", accent)>
                {move || value.get()}
            </div>
        </div>
    }
}
