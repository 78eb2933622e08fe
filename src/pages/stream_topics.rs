//! Student view: available topics within one stream.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Lists a stream's available topics with a link to apply for each.
/// The stream ID comes from the route parameter.
#[component]
pub fn StreamTopicsPage() -> impl IntoView {
    let params = use_params_map();
    let stream_id = move || {
        params
            .read()
            .get("stream_id")
            .and_then(|raw| raw.parse::<i64>().ok())
    };

    let topics = LocalResource::new(move || async move {
        match stream_id() {
            Some(id) => crate::net::courses::stream_topics(id).await,
            None => Ok(Vec::new()),
        }
    });

    view! {
        <div>
            <h1 class="mb-4 text-xl font-semibold">"Available Topics"</h1>
            <Suspense fallback=move || view! { <p>"Loading topics..."</p> }>
                {move || {
                    topics.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="text-neutral-600">"No available topics in this stream."</p> }
                                .into_any()
                        }
                        Ok(list) => view! {
                            <ul class="space-y-3">
                                {list
                                    .into_iter()
                                    .map(|topic| {
                                        let submit_href = format!("/topics/{}/submit", topic.id);
                                        let teacher = format!(
                                            "{} {}",
                                            topic.teacher.first_name, topic.teacher.last_name,
                                        );
                                        view! {
                                            <li class="rounded border p-4">
                                                <div class="font-medium">{topic.title}</div>
                                                <p class="text-sm text-neutral-600">{topic.description}</p>
                                                <div class="mt-1 text-sm">{teacher}</div>
                                                <A href=submit_href>"Apply"</A>
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
