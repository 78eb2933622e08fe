//! Teacher view: edit an existing topic.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::TopicPayload;

/// Topic edit form. There is no single-topic endpoint, so the form is
/// prefilled from the teacher's topic list once it loads.
#[component]
pub fn TopicEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let topics = LocalResource::new(|| crate::net::courses::my_topics(true));

    let topic_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let stream_id = RwSignal::new(None::<i64>);
    let prefilled = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    // Prefill once the topic list and the route param are both available.
    Effect::new(move || {
        if prefilled.get() {
            return;
        }
        let Some(id) = topic_id() else { return };
        let Some(Ok(list)) = topics.get() else { return };
        if let Some(topic) = list.into_iter().find(|topic| topic.id == id) {
            title.set(topic.title);
            description.set(topic.description);
            stream_id.set(Some(topic.stream.id));
            prefilled.set(true);
        } else {
            error.set(Some("Topic not found.".to_owned()));
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(id), Some(stream_id)) = (topic_id(), stream_id.get()) else {
            return;
        };
        if pending.get() {
            return;
        }
        pending.set(true);
        error.set(None);

        let payload = TopicPayload {
            title: title.get(),
            description: description.get(),
            stream_id,
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::courses::update_topic(id, &payload).await {
                Ok(_) => navigate("/my-topics", NavigateOptions::default()),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="mx-auto max-w-lg">
            <h1 class="mb-4 text-xl font-semibold">"Edit Topic"</h1>
            <form on:submit=submit>
                <label class="mb-3 block text-sm">
                    "Title"
                    <input
                        class="mt-1 w-full rounded border px-2 py-1"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="mb-3 block text-sm">
                    "Description"
                    <textarea
                        class="mt-1 w-full rounded border px-2 py-1"
                        rows="5"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="mb-3 text-sm text-red-600">{move || error.get()}</p>
                </Show>
                <button
                    class="rounded bg-basic-blue px-3 py-2 text-white disabled:opacity-50"
                    type="submit"
                    prop:disabled=move || pending.get() || !prefilled.get()
                >
                    "Save changes"
                </button>
            </form>
        </div>
    }
}
