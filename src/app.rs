//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::guard::RouteGuard;
use crate::pages::{
    change_password::ChangePasswordPage, home::HomeRedirect, login::LoginPage,
    my_streams::MyStreamsPage, my_submissions::MySubmissionsPage, my_topics::MyTopicsPage,
    received_submissions::ReceivedSubmissionsPage, stream_topics::StreamTopicsPage,
    submission_create::SubmissionCreatePage, topic_create::TopicCreatePage,
    topic_edit::TopicEditPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session, provides it as shared context, and sets
/// up client-side routing with the navigation guard mounted inside the
/// router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restore());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/studyportal.css"/>
        <Title text="Course Portal"/>

        <Router>
            <RouteGuard/>
            <NavBar/>
            <main class="mx-auto max-w-4xl px-4 py-6 text-neutral-900">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("change-password") view=ChangePasswordPage/>
                    <Route path=StaticSegment("my-streams") view=MyStreamsPage/>
                    <Route
                        path=(StaticSegment("streams"), ParamSegment("stream_id"), StaticSegment("topics"))
                        view=StreamTopicsPage
                    />
                    <Route path=StaticSegment("my-topics") view=MyTopicsPage/>
                    <Route path=(StaticSegment("topics"), StaticSegment("create")) view=TopicCreatePage/>
                    <Route
                        path=(StaticSegment("topics"), StaticSegment("edit"), ParamSegment("id"))
                        view=TopicEditPage
                    />
                    <Route path=StaticSegment("my-submissions") view=MySubmissionsPage/>
                    <Route
                        path=(StaticSegment("topics"), ParamSegment("topic_id"), StaticSegment("submit"))
                        view=SubmissionCreatePage
                    />
                    <Route path=StaticSegment("received-submissions") view=ReceivedSubmissionsPage/>
                </Routes>
            </main>
        </Router>
    }
}
