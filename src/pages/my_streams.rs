//! Student view: streams the student belongs to.

use leptos::prelude::*;
use leptos_router::components::A;

/// Lists the student's active streams with a link into each stream's
/// available topics.
#[component]
pub fn MyStreamsPage() -> impl IntoView {
    let streams = LocalResource::new(|| crate::net::courses::my_streams(true));

    view! {
        <div>
            <h1 class="mb-4 text-xl font-semibold">"My Streams"</h1>
            <Suspense fallback=move || view! { <p>"Loading streams..."</p> }>
                {move || {
                    streams.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="text-neutral-600">"No active streams."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <ul class="space-y-3">
                                {list
                                    .into_iter()
                                    .map(|stream| {
                                        let topics_href = format!("/streams/{}/topics", stream.id);
                                        view! {
                                            <li class="rounded border p-4">
                                                <div class="font-medium">{stream.name}</div>
                                                <div class="text-sm text-neutral-600">
                                                    {format!(
                                                        "{} ({}), {} — semester {}, course {}",
                                                        stream.specialty.name,
                                                        stream.specialty.code,
                                                        stream.academic_year,
                                                        stream.semester,
                                                        stream.course_number,
                                                    )}
                                                </div>
                                                <A href=topics_href>"View topics"</A>
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
