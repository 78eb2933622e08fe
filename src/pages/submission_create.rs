//! Student view: apply for a topic.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::SubmissionPayload;

/// Submission form for one topic. The backend requires a non-empty
/// vision statement, so the form enforces it too.
#[component]
pub fn SubmissionCreatePage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();

    let vision = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(topic_id) = params
            .read_untracked()
            .get("topic_id")
            .and_then(|raw| raw.parse::<i64>().ok())
        else {
            return;
        };
        let statement = vision.get();
        if statement.trim().is_empty() {
            error.set(Some("Describe your vision for the topic first.".to_owned()));
            return;
        }
        if pending.get() {
            return;
        }
        pending.set(true);
        error.set(None);

        let payload = SubmissionPayload {
            topic_id,
            student_vision: statement,
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::courses::create_submission(&payload).await {
                Ok(_) => navigate("/my-submissions", NavigateOptions::default()),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="mx-auto max-w-lg">
            <h1 class="mb-4 text-xl font-semibold">"Apply for Topic"</h1>
            <form on:submit=submit>
                <label class="mb-3 block text-sm">
                    "Your vision"
                    <textarea
                        class="mt-1 w-full rounded border px-2 py-1"
                        rows="6"
                        prop:value=move || vision.get()
                        on:input=move |ev| vision.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="mb-3 text-sm text-red-600">{move || error.get()}</p>
                </Show>
                <button
                    class="rounded bg-basic-blue px-3 py-2 text-white disabled:opacity-50"
                    type="submit"
                    prop:disabled=move || pending.get()
                >
                    "Submit application"
                </button>
            </form>
        </div>
    }
}
