//! Teacher view: the teacher's own topics.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::TopicStatus;

/// Lists the teacher's topics in active streams with edit and delete
/// actions. Deleting a topic that already has submissions is rejected by
/// the backend; the error is shown inline.
#[component]
pub fn MyTopicsPage() -> impl IntoView {
    let topics = LocalResource::new(|| crate::net::courses::my_topics(true));
    let error = RwSignal::new(None::<String>);

    let delete = move |topic_id: i64| {
        leptos::task::spawn_local(async move {
            match crate::net::courses::delete_topic(topic_id).await {
                Ok(()) => topics.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div>
            <header class="mb-4 flex items-center justify-between">
                <h1 class="text-xl font-semibold">"My Topics"</h1>
                <A href="/topics/create">"+ New Topic"</A>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="mb-3 text-red-600">{move || error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading topics..."</p> }>
                {move || {
                    topics.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="text-neutral-600">"No topics yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <ul class="space-y-3">
                                {list
                                    .into_iter()
                                    .map(|topic| {
                                        let id = topic.id;
                                        let edit_href = format!("/topics/edit/{id}");
                                        let taken = topic.status == TopicStatus::Taken;
                                        view! {
                                            <li class="rounded border p-4">
                                                <div class="flex items-center gap-2">
                                                    <span class="font-medium">{topic.title}</span>
                                                    <Show when=move || taken>
                                                        <span class="rounded bg-neutral-600 px-1 text-xs text-white">
                                                            "Taken"
                                                        </span>
                                                    </Show>
                                                </div>
                                                <div class="text-sm text-neutral-600">{topic.stream.name}</div>
                                                <div class="mt-2 flex gap-3 text-sm">
                                                    <A href=edit_href>"Edit"</A>
                                                    <button
                                                        class="text-red-600"
                                                        on:click=move |_| delete(id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                        .into_any(),
                        Err(err) => {
                            view! { <p class="text-red-600">{err.to_string()}</p> }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
