//! Cattle List Page
//!
//! Searchable, status-filtered table with an add form and per-row delete.

use leptos::*;
use vacuno::api::CattleClient;
use vacuno::models::{Animal, Estado, Sexo};
use vacuno::views::{messages, CattleListView, DraftField};

use crate::components::{ErrorMessage, InlineLoading, ListSkeleton, StatusBadge};
use crate::state::use_app_state;

/// Fetch with the given status filter and fold the result in
fn fetch(cattle: CattleClient, list: RwSignal<CattleListView>, estado: Option<Estado>) {
    spawn_local(async move {
        let result = cattle.list(estado).await;
        list.update(|l| l.finish_load(result));
    });
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Cattle list page component
#[component]
pub fn CattleList() -> impl IntoView {
    let state = use_app_state();
    let list = create_rw_signal(CattleListView::new());
    let client = store_value(state.cattle.clone());

    // Initial load
    create_effect(move |_| {
        let estado = list.try_update(|l| l.begin_load()).flatten();
        fetch(client.get_value(), list, estado);
    });

    let on_status = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let selected = value.parse::<Estado>().ok();
        let estado = list.try_update(|l| l.set_status_filter(selected)).flatten();
        fetch(client.get_value(), list, estado);
    };

    let on_create = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let Some(request) = list.try_update(|l| l.begin_create()).flatten() else {
                return;
            };

            let state = state.clone();
            spawn_local(async move {
                let result = client.get_value().create(&request).await;
                if list.try_update(|l| l.finish_create(result)).unwrap_or(false) {
                    state.show_success("Registro creado");
                    let estado = list.try_update(|l| l.begin_load()).flatten();
                    fetch(client.get_value(), list, estado);
                }
            });
        }
    };

    let on_delete = move |id: String| {
        if !confirm(messages::DELETE_CONFIRM) {
            return;
        }

        spawn_local(async move {
            match client.get_value().delete(&id).await {
                Ok(()) => {
                    let estado = list.try_update(|l| l.begin_load()).flatten();
                    fetch(client.get_value(), list, estado);
                }
                Err(e) => alert(&CattleListView::delete_failure_message(&e)),
            }
        });
    };

    view! {
        <div class="space-y-6">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Ganado"</h1>
                    <p class="text-gray-400 mt-1">"Registros del hato"</p>
                </div>
                <button
                    on:click=move |_| list.update(|l| l.toggle_add_form())
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    {move || if list.with(|l| l.show_add_form) { "Cancelar" } else { "Agregar" }}
                </button>
            </div>

            <ErrorMessage message=Signal::derive(move || list.with(|l| l.error.clone())) />

            <Show when=move || list.with(|l| l.show_add_form)>
                <AddForm list=list on_submit=on_create.clone() />
            </Show>

            // Filters
            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="text"
                    placeholder="Buscar por nombre o identificador"
                    prop:value=move || list.with(|l| l.search().to_string())
                    on:input=move |ev| list.update(|l| l.set_search(&event_target_value(&ev)))
                    class="flex-1 bg-gray-800 border border-gray-700 rounded-lg px-3 py-2 focus:outline-none focus:border-primary-500"
                />
                <select
                    on:change=on_status
                    class="bg-gray-800 border border-gray-700 rounded-lg px-3 py-2"
                >
                    <option value="">"Todos los estados"</option>
                    {Estado::FILTERABLE.into_iter().map(|estado| view! {
                        <option value=estado.as_str()>{estado.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            // Table
            <section class="bg-gray-800 rounded-xl p-6 overflow-x-auto">
                {move || {
                    if list.with(|l| l.loading) {
                        return view! { <ListSkeleton count=5 /> }.into_view();
                    }
                    if list.with(|l| l.is_empty()) {
                        return view! {
                            <p class="text-gray-400 text-center py-8">{messages::NO_RECORDS}</p>
                        }.into_view();
                    }

                    view! {
                        <table class="w-full text-left text-sm">
                            <thead class="text-gray-400 border-b border-gray-700">
                                <tr>
                                    <th class="py-2">"Identificador"</th>
                                    <th>"Nombre"</th>
                                    <th>"Raza"</th>
                                    <th>"Nacimiento"</th>
                                    <th>"Sexo"</th>
                                    <th>"Estado"</th>
                                    <th>"Peso"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || list.with(|l| l.visible().to_vec())
                                    key=|animal| animal.id.clone()
                                    children=move |animal| view! { <CattleRow animal=animal on_delete=on_delete /> }
                                />
                            </tbody>
                        </table>
                    }.into_view()
                }}
            </section>
        </div>
    }
}

#[component]
fn CattleRow<F>(animal: Animal, on_delete: F) -> impl IntoView
where
    F: Fn(String) + Copy + 'static,
{
    let id = animal.id.clone();

    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="py-2 font-mono">{animal.identificador}</td>
            <td>{animal.nombre}</td>
            <td>{animal.raza.unwrap_or_else(|| "-".to_string())}</td>
            <td>
                {animal.fecha_nacimiento
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_else(|| "-".to_string())}
            </td>
            <td>{animal.sexo.label()}</td>
            <td><StatusBadge estado=animal.estado /></td>
            <td>
                {animal.peso_actual
                    .map(|p| format!("{:.1} kg", p))
                    .unwrap_or_else(|| "-".to_string())}
            </td>
            <td class="text-right">
                <button
                    on:click=move |_| on_delete(id.clone())
                    class="text-red-400 hover:text-red-300"
                >
                    "Eliminar"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn AddForm<F>(list: RwSignal<CattleListView>, on_submit: F) -> impl IntoView
where
    F: Fn(ev::SubmitEvent) + 'static,
{
    let field = move |field: DraftField, label: &'static str, input_type: &'static str| {
        let value = move || {
            list.with(|l| match field {
                DraftField::Identificador => l.draft.identificador.clone(),
                DraftField::Nombre => l.draft.nombre.clone(),
                DraftField::Raza => l.draft.raza.clone(),
                DraftField::FechaNacimiento => l.draft.fecha_nacimiento.clone(),
                DraftField::Sexo => l.draft.sexo.code().to_string(),
                DraftField::PesoActual => l.draft.peso_actual.clone(),
            })
        };

        view! {
            <label class="block">
                <span class="text-sm text-gray-400">{label}</span>
                <input
                    type=input_type
                    prop:value=value
                    on:input=move |ev| list.update(|l| l.set_draft_field(field, &event_target_value(&ev)))
                    class="mt-1 w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                />
            </label>
        }
    };

    view! {
        <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 grid md:grid-cols-3 gap-4">
            {field(DraftField::Identificador, "Identificador *", "text")}
            {field(DraftField::Nombre, "Nombre *", "text")}
            {field(DraftField::Raza, "Raza", "text")}
            {field(DraftField::FechaNacimiento, "Fecha de nacimiento", "date")}
            <label class="block">
                <span class="text-sm text-gray-400">"Sexo"</span>
                <select
                    on:change=move |ev| list.update(|l| l.set_draft_field(DraftField::Sexo, &event_target_value(&ev)))
                    class="mt-1 w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2"
                >
                    {[Sexo::H, Sexo::M].into_iter().map(|sexo| view! {
                        <option
                            value=sexo.code()
                            selected=move || list.with(|l| l.draft.sexo == sexo)
                        >
                            {sexo.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>
            {field(DraftField::PesoActual, "Peso actual (kg)", "number")}
            <div class="md:col-span-3">
                <button
                    type="submit"
                    disabled=move || list.with(|l| l.loading)
                    class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600 rounded-lg font-semibold flex items-center space-x-2"
                >
                    {move || list.with(|l| l.loading).then(|| view! { <InlineLoading /> })}
                    <span>"Guardar"</span>
                </button>
            </div>
        </form>
    }
}
