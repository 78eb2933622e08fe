//! Teacher view: submissions received for the teacher's topics.

use leptos::prelude::*;

use crate::net::types::{Submission, SubmissionStatus};

/// Lists the teacher's topics that received submissions, with approve
/// and reject actions on pending ones. Approving a submission marks the
/// topic as taken and rejects its other pending submissions, so the list
/// is refetched after every action.
#[component]
pub fn ReceivedSubmissionsPage() -> impl IntoView {
    let topics = LocalResource::new(|| crate::net::courses::received_submissions());
    let error = RwSignal::new(None::<String>);

    let approve = move |submission_id: i64| {
        leptos::task::spawn_local(async move {
            match crate::net::courses::approve_submission(submission_id).await {
                Ok(_) => topics.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };
    let reject = move |submission_id: i64| {
        leptos::task::spawn_local(async move {
            match crate::net::courses::reject_submission(submission_id).await {
                Ok(_) => topics.refetch(),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div>
            <h1 class="mb-4 text-xl font-semibold">"Received Submissions"</h1>
            <Show when=move || error.get().is_some()>
                <p class="mb-3 text-red-600">{move || error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading submissions..."</p> }>
                {move || {
                    topics.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <p class="text-neutral-600">"No submissions received."</p> }
                                .into_any()
                        }
                        Ok(list) => view! {
                            <div class="space-y-5">
                                {list
                                    .into_iter()
                                    .map(|topic| {
                                        view! {
                                            <section class="rounded border p-4">
                                                <h2 class="mb-2 font-medium">{topic.title}</h2>
                                                <ul class="space-y-2">
                                                    {topic
                                                        .submissions
                                                        .into_iter()
                                                        .map(|submission| {
                                                            submission_row(submission, approve, reject)
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </ul>
                                            </section>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
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

fn submission_row(
    submission: Submission,
    approve: impl Fn(i64) + Copy + 'static + Send + Sync,
    reject: impl Fn(i64) + Copy + 'static + Send + Sync,
) -> impl IntoView {
    let id = submission.id;
    let pending = submission.status == SubmissionStatus::Pending;
    let student = format!(
        "{} {} ({})",
        submission.student.first_name, submission.student.last_name, submission.student.email,
    );
    let status = match submission.status {
        SubmissionStatus::Pending => "Pending",
        SubmissionStatus::Approved => "Approved",
        SubmissionStatus::Rejected => "Rejected",
    };

    view! {
        <li class="rounded border p-3">
            <div class="flex items-center gap-2">
                <span class="text-sm font-medium">{student}</span>
                <span class="text-xs text-neutral-600">{status}</span>
            </div>
            <p class="mt-1 text-sm text-neutral-600">{submission.student_vision}</p>
            <Show when=move || pending>
                <div class="mt-2 flex gap-3 text-sm">
                    <button class="text-green-700" on:click=move |_| approve(id)>
                        "Approve"
                    </button>
                    <button class="text-red-600" on:click=move |_| reject(id)>
                        "Reject"
                    </button>
                </div>
            </Show>
        </li>
    }
}
