//! Login page with the email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::auth::HttpApi;
use crate::net::types::LoginRequest;
use crate::state::auth::AuthState;

/// Login page — authenticates and forwards to the role landing page.
/// Failures are shown inline; nothing is stored until login succeeds.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        pending.set(true);
        error.set(None);

        let credentials = LoginRequest {
            email: email.get(),
            password: password.get(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let mut state = auth.get_untracked();
            match crate::state::auth::login(&HttpApi, &mut state, &credentials).await {
                Ok(target) => {
                    auth.set(state);
                    navigate(target, NavigateOptions::default());
                }
                Err(err) => {
                    auth.set(state);
                    error.set(Some(err.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="mx-auto mt-16 max-w-sm rounded border p-6 shadow">
            <h1 class="mb-4 text-xl font-semibold">"Course Portal"</h1>
            <form on:submit=submit>
                <label class="mb-3 block text-sm">
                    "Email"
                    <input
                        class="mt-1 w-full rounded border px-2 py-1"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="mb-3 block text-sm">
                    "Password"
                    <input
                        class="mt-1 w-full rounded border px-2 py-1"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="mb-3 text-sm text-red-600">{move || error.get()}</p>
                </Show>
                <button
                    class="w-full rounded bg-basic-blue px-3 py-2 text-white disabled:opacity-50"
                    type="submit"
                    prop:disabled=move || pending.get()
                >
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
