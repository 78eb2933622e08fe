//! Top navigation bar with role-appropriate links and the logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::auth::HttpApi;
use crate::state::auth::AuthState;

/// Navigation bar. Hidden until the session is authenticated; students
/// and teachers each see their own set of links.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = StoredValue::new(use_navigate());

    let on_logout = move |_| {
        let navigate = navigate.get_value();
        leptos::task::spawn_local(async move {
            let mut state = auth.get_untracked();
            let target = crate::state::auth::logout(&HttpApi, &mut state).await;
            auth.set(state);
            navigate(target, NavigateOptions::default());
        });
    };

    view! {
        <Show when=move || auth.get().is_authenticated()>
            <nav class="flex items-center gap-4 bg-basic-blue px-4 py-3 text-white">
                <span class="font-semibold">"Course Portal"</span>

                <Show when=move || auth.get().is_student()>
                    <A href="/my-streams">"My Streams"</A>
                    <A href="/my-submissions">"My Submissions"</A>
                </Show>
                <Show when=move || auth.get().is_teacher()>
                    <A href="/my-topics">"My Topics"</A>
                    <A href="/received-submissions">"Received Submissions"</A>
                </Show>

                <div class="ml-auto flex items-center gap-4">
                    <span class="text-sm">{move || auth.get().user.map(|u| u.email)}</span>
                    <A href="/change-password">"Change Password"</A>
                    <button class="rounded border border-white px-2 py-1 text-sm" on:click=on_logout>
                        "Log out"
                    </button>
                </div>
            </nav>
        </Show>
    }
}
