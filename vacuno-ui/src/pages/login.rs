//! Login Page
//!
//! Login form with a collapsible self-registration panel.

use leptos::*;
use leptos_router::*;
use vacuno::views::{LoginField, LoginView, RegisterField};

use crate::components::{ErrorMessage, InlineLoading};
use crate::state::{use_app_state, AppState};

/// Submit the login form and navigate on success
fn submit_login(state: AppState, form: RwSignal<LoginView>, navigate: impl Fn(&str, NavigateOptions) + 'static) {
    let Some(credentials) = form.try_update(|f| f.begin_login()).flatten() else {
        return;
    };

    spawn_local(async move {
        let result = state.auth.login(&credentials.email, &credentials.password).await;
        let next = form.try_update(|f| f.finish_login(result)).flatten();
        state.sync_session();

        if let Some(route) = next {
            navigate(route.path(), Default::default());
        }
    });
}

/// Register, then log in with the same credentials
fn submit_register(state: AppState, form: RwSignal<LoginView>, navigate: impl Fn(&str, NavigateOptions) + 'static) {
    let Some(registration) = form.try_update(|f| f.begin_register()).flatten() else {
        return;
    };

    spawn_local(async move {
        let result = state
            .auth
            .register(&registration.nombre, &registration.email, &registration.password)
            .await;

        if form.try_update(|f| f.finish_register(result)).unwrap_or(false) {
            submit_login(state, form, navigate);
        }
    });
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();
    let form = create_rw_signal(LoginView::new());

    let on_login = {
        let state = state.clone();
        let navigate = navigate.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            submit_login(state.clone(), form, navigate.clone());
        }
    };

    let on_register = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_register(state.clone(), form, navigate.clone());
    };

    let loading = Signal::derive(move || form.with(|f| f.loading));
    let error = Signal::derive(move || form.with(|f| f.error.clone()));

    view! {
        <div class="max-w-md mx-auto mt-12 space-y-6">
            <div class="text-center">
                <h1 class="text-3xl font-bold">"Iniciar sesión"</h1>
                <p class="text-gray-400 mt-1">"Gestión de ganado"</p>
            </div>

            <ErrorMessage message=error />

            <form on:submit=on_login class="bg-gray-800 rounded-xl p-6 space-y-4">
                <TextField
                    label="Email"
                    input_type="email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=move |v| form.update(|f| f.set_login_field(LoginField::Email, &v))
                />
                <TextField
                    label="Contraseña"
                    input_type="password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=move |v| form.update(|f| f.set_login_field(LoginField::Password, &v))
                />
                <SubmitButton label="Entrar" loading=loading />
            </form>

            <div class="text-center">
                <button
                    class="text-primary-400 hover:text-primary-300 text-sm"
                    on:click=move |_| form.update(|f| f.toggle_register())
                >
                    {move || if form.with(|f| f.show_register) {
                        "Ocultar registro"
                    } else {
                        "¿No tiene cuenta? Regístrese"
                    }}
                </button>
            </div>

            <Show when=move || form.with(|f| f.show_register)>
                <form on:submit=on_register.clone() class="bg-gray-800 rounded-xl p-6 space-y-4">
                    <h2 class="text-xl font-semibold">"Registro"</h2>
                    <TextField
                        label="Nombre"
                        input_type="text"
                        value=Signal::derive(move || form.with(|f| f.register.nombre.clone()))
                        on_input=move |v| form.update(|f| f.set_register_field(RegisterField::Nombre, &v))
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        value=Signal::derive(move || form.with(|f| f.register.email.clone()))
                        on_input=move |v| form.update(|f| f.set_register_field(RegisterField::Email, &v))
                    />
                    <TextField
                        label="Contraseña"
                        input_type="password"
                        value=Signal::derive(move || form.with(|f| f.register.password.clone()))
                        on_input=move |v| form.update(|f| f.set_register_field(RegisterField::Password, &v))
                    />
                    <SubmitButton label="Registrarse" loading=loading />
                </form>
            </Show>
        </div>
    }
}

/// Labelled controlled input
#[component]
fn TextField<F>(
    label: &'static str,
    input_type: &'static str,
    value: Signal<String>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <label class="block">
            <span class="text-sm text-gray-400">{label}</span>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                class="mt-1 w-full bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 focus:outline-none focus:border-primary-500"
            />
        </label>
    }
}

#[component]
fn SubmitButton(label: &'static str, loading: Signal<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || loading.get()
            class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                   disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                   transition-colors flex items-center justify-center space-x-2"
        >
            {move || if loading.get() {
                view! {
                    <InlineLoading />
                    <span>"Enviando..."</span>
                }.into_view()
            } else {
                view! { <span>{label}</span> }.into_view()
            }}
        </button>
    }
}
