//! Student view: the student's own submissions.

use leptos::prelude::*;

use crate::net::types::SubmissionStatus;

fn status_label(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Pending => "Pending",
        SubmissionStatus::Approved => "Approved",
        SubmissionStatus::Rejected => "Rejected",
    }
}

/// Lists the student's submissions, newest first; pending ones can be
/// canceled.
#[component]
pub fn MySubmissionsPage() -> impl IntoView {
    let submissions = LocalResource::new(|| crate::net::courses::my_submissions());
    let error = RwSignal::new(None::<String>);

    let cancel = move |submission_id: i64| {
        leptos::task::spawn_local(async move {
            match crate::net::courses::cancel_submission(submission_id).await {
                Ok(()) => submissions.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div>
            <h1 class="mb-4 text-xl font-semibold">"My Submissions"</h1>
            <Show when=move || error.get().is_some()>
                <p class="mb-3 text-red-600">{move || error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading submissions..."</p> }>
                {move || {
                    submissions.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="text-neutral-600">"No submissions yet."</p> }.into_any()
                        }
                        Ok(list) => view! {
                            <ul class="space-y-3">
                                {list
                                    .into_iter()
                                    .map(|submission| {
                                        let cancelable =
                                            submission.status == SubmissionStatus::Pending;
                                        let id = submission.id;
                                        view! {
                                            <li class="rounded border p-4">
                                                <div class="font-medium">{submission.topic.title}</div>
                                                <div class="text-sm text-neutral-600">
                                                    {format!(
                                                        "{} — {}",
                                                        status_label(submission.status),
                                                        submission.created_at,
                                                    )}
                                                </div>
                                                <Show when=move || cancelable>
                                                    <button
                                                        class="mt-2 rounded border px-2 py-1 text-sm"
                                                        on:click=move |_| cancel(id)
                                                    >
                                                        "Cancel"
                                                    </button>
                                                </Show>
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
