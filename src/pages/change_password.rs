//! Change-password form.

use leptos::prelude::*;

use crate::net::auth::HttpApi;
use crate::net::types::ChangePasswordRequest;

/// Change-password page. Forwards to the backend and reports the outcome
/// inline; session state is untouched either way.
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let new_password1 = RwSignal::new(String::new());
    let new_password2 = RwSignal::new(String::new());
    let message = RwSignal::new(None::<Result<(), String>>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        pending.set(true);
        message.set(None);

        let request = ChangePasswordRequest {
            new_password1: new_password1.get(),
            new_password2: new_password2.get(),
        };
        leptos::task::spawn_local(async move {
            let outcome = crate::state::auth::change_password(&HttpApi, &request)
                .await
                .map_err(|err| err.to_string());
            if outcome.is_ok() {
                new_password1.set(String::new());
                new_password2.set(String::new());
            }
            message.set(Some(outcome));
            pending.set(false);
        });
    };

    view! {
        <div class="mx-auto mt-8 max-w-sm rounded border p-6 shadow">
            <h1 class="mb-4 text-xl font-semibold">"Change Password"</h1>
            <form on:submit=submit>
                <label class="mb-3 block text-sm">
                    "New password"
                    <input
                        class="mt-1 w-full rounded border px-2 py-1"
                        type="password"
                        prop:value=move || new_password1.get()
                        on:input=move |ev| new_password1.set(event_target_value(&ev))
                    />
                </label>
                <label class="mb-3 block text-sm">
                    "Repeat new password"
                    <input
                        class="mt-1 w-full rounded border px-2 py-1"
                        type="password"
                        prop:value=move || new_password2.get()
                        on:input=move |ev| new_password2.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    message.get().map(|outcome| match outcome {
                        Ok(()) => view! {
                            <p class="mb-3 text-sm text-green-700">"Password changed."</p>
                        }
                        .into_any(),
                        Err(err) => view! {
                            <p class="mb-3 text-sm text-red-600">{err}</p>
                        }
                        .into_any(),
                    })
                }}
                <button
                    class="w-full rounded bg-basic-blue px-3 py-2 text-white disabled:opacity-50"
                    type="submit"
                    prop:disabled=move || pending.get()
                >
                    "Change password"
                </button>
            </form>
        </div>
    }
}
