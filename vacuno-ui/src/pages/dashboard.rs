//! Dashboard Page
//!
//! Herd summary: totals by status, average weight and the latest records.

use leptos::*;
use leptos_router::*;
use vacuno::views::{messages, DashboardView, Route};

use crate::components::{ErrorMessage, ListSkeleton, StatCard, StatusBadge};
use crate::state::use_app_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let dashboard = create_rw_signal(DashboardView::new());

    // Fetch once on mount
    create_effect(move |_| {
        let cattle = state.cattle.clone();
        spawn_local(async move {
            dashboard.update(|d| d.begin_load());
            let result = cattle.list(None).await;
            dashboard.update(|d| d.finish_load(result));
        });
    });

    let stat = move |pick: fn(&DashboardView) -> String| Signal::derive(move || dashboard.with(pick));

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Resumen del hato"</p>
            </div>

            <ErrorMessage message=Signal::derive(move || dashboard.with(|d| d.error.clone())) />

            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Total de animales" value=stat(|d| d.stats.total.to_string()) />
                <StatCard label="Activas" value=stat(|d| d.stats.healthy.to_string()) accent="text-green-400" />
                <StatCard label="Enfermas" value=stat(|d| d.stats.sick.to_string()) accent="text-red-400" />
                <StatCard label="Peso promedio" value=stat(|d| d.stats.avg_weight.to_string()) unit="kg" />
            </section>

            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Registros recientes"</h2>
                    <A href=Route::Cattle.path() class="text-primary-400 hover:text-primary-300 text-sm">
                        "Ver todo"
                    </A>
                </div>

                {move || {
                    if dashboard.with(|d| d.loading) {
                        return view! { <ListSkeleton count=5 /> }.into_view();
                    }

                    let recent = dashboard.with(|d| d.recent.clone());
                    if recent.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm">{messages::NO_RECORDS_YET}</p>
                        }.into_view();
                    }

                    recent.into_iter().map(|animal| view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                            <div>
                                <span class="font-medium">{animal.nombre}</span>
                                <span class="text-gray-400 text-sm ml-2">{animal.identificador}</span>
                            </div>
                            <div class="flex items-center space-x-3">
                                <span class="text-sm text-gray-300">
                                    {animal.peso_actual.map(|p| format!("{:.0} kg", p)).unwrap_or_else(|| "-".to_string())}
                                </span>
                                <StatusBadge estado=animal.estado />
                            </div>
                        </div>
                    }).collect_view()
                }}
            </section>
        </div>
    }
}
