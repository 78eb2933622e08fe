//! Navigation guard: gates every route transition on authentication and
//! role requirements.
//!
//! DESIGN
//! ======
//! The access decision itself is a pure function over the target path and
//! the current session ([`evaluate`]), so the whole redirect matrix is
//! unit-testable. [`check`] wraps it with the one async step the guard
//! needs: settling a pending profile fetch when a token was restored
//! without its profile. [`RouteGuard`] is the Leptos glue that runs
//! [`check`] once per location change and applies redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::auth::{AuthApi, HttpApi};
use crate::routes;
use crate::state::auth::{self, AuthState};

/// Outcome of guarding one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Pure access decision for a navigation target.
///
/// Assumes any pending profile fetch has already settled. Checks run in
/// order: authentication, role membership, then the login-page special
/// case (an authenticated user never sees the login view).
pub fn evaluate(path: &str, state: &AuthState) -> GuardDecision {
    if let Some(access) = routes::access_for(path) {
        if access.requires_auth {
            if !state.is_authenticated() {
                return GuardDecision::Redirect(routes::LOGIN);
            }
            if let Some(allowed) = access.roles {
                match state.role() {
                    Some(role) if allowed.contains(&role) => {}
                    // Wrong role: send the user to their own landing page.
                    Some(_) => return GuardDecision::Redirect(state.landing_route()),
                    // Authenticated but no recognized role: re-authenticate.
                    None => return GuardDecision::Redirect(routes::LOGIN),
                }
            }
        }
    }

    if path == routes::LOGIN && state.is_authenticated() {
        return GuardDecision::Redirect(state.landing_route());
    }

    GuardDecision::Allow
}

/// Full guard for one navigation.
///
/// When a token is held but no profile is cached (a reload restored only
/// the token), the profile fetch runs to completion first; its failure
/// path clears the session, so [`evaluate`] sees the settled state either
/// way.
pub async fn check<A: AuthApi>(api: &A, state: &mut AuthState, path: &str) -> GuardDecision {
    if state.token.is_some() && state.user.is_none() {
        auth::fetch_user(api, state).await;
    }
    evaluate(path, state)
}

/// Runs the guard on every location change and applies redirects.
///
/// Mounted once inside the router. Each navigation spawns a single task
/// that settles the session and either lets the view stand or navigates
/// away.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let mut state = auth.get_untracked();
            let decision = check(&HttpApi, &mut state, &path).await;
            auth.set(state);
            if let GuardDecision::Redirect(target) = decision {
                navigate(target, NavigateOptions::default());
            }
        });
    });
}
