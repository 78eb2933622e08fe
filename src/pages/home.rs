//! Root path: forwards to the role landing page, or to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::auth::AuthState;

/// Redirect-only view for `/`.
///
/// Waits while a restored token still lacks its profile (the guard is
/// fetching it); once the session is settled, authenticated users go to
/// their landing page and everyone else to the login view.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.token.is_some() && state.user.is_none() {
            return;
        }
        let target = match state.role() {
            Some(_) => state.landing_route(),
            None => routes::LOGIN,
        };
        navigate(target, NavigateOptions::default());
    });
}
