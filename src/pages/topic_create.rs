//! Teacher view: create a new topic in one of the teacher's streams.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::TopicPayload;

/// Topic creation form: title, description, and a stream picker fed by
/// the teacher's active streams.
#[component]
pub fn TopicCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let streams = LocalResource::new(|| crate::net::courses::my_streams(true));

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let stream_id = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(stream_id) = stream_id.get().parse::<i64>() else {
            error.set(Some("Pick a stream for the topic.".to_owned()));
            return;
        };
        if title.get().trim().is_empty() {
            error.set(Some("The topic needs a title.".to_owned()));
            return;
        }
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
            match crate::net::courses::create_topic(&payload).await {
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
            <h1 class="mb-4 text-xl font-semibold">"New Topic"</h1>
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
                <label class="mb-3 block text-sm">
                    "Stream"
                    <select
                        class="mt-1 w-full rounded border px-2 py-1"
                        on:change=move |ev| stream_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a stream"</option>
                        <Suspense fallback=|| ()>
                            {move || {
                                streams.get().and_then(Result::ok).map(|list| {
                                    list.into_iter()
                                        .map(|stream| {
                                            view! {
                                                <option value=stream.id.to_string()>{stream.name}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                            }}
                        </Suspense>
                    </select>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="mb-3 text-sm text-red-600">{move || error.get()}</p>
                </Show>
                <button
                    class="rounded bg-basic-blue px-3 py-2 text-white disabled:opacity-50"
                    type="submit"
                    prop:disabled=move || pending.get()
                >
                    "Create topic"
                </button>
            </form>
        </div>
    }
}
