//! Session state: who is logged in and with what role.
//!
//! DESIGN
//! ======
//! `AuthState` is the single owned session object, provided to the
//! component tree as an `RwSignal<AuthState>` context. Every token/user
//! mutation goes through `set_token`/`set_user`/`clear`, which mirror the
//! change to durable storage in the same call, so a page reload restores
//! exactly what was last committed.
//!
//! The async actions are free functions generic over [`AuthApi`] and
//! return the route the caller should navigate to instead of navigating
//! themselves; only components and the guard touch the router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::auth::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{ChangePasswordRequest, LoginRequest, Role, User};
use crate::routes;
use crate::util::storage;

/// Storage key holding the raw session token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key holding the JSON-serialized user profile.
pub const USER_KEY: &str = "user";

/// The current session: an opaque token and the profile it belongs to.
///
/// Both halves are independently optional; a token without a profile
/// (e.g. right after a page reload) is reconciled by [`fetch_user`]
/// before any role-gated decision is made.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthState {
    /// Restore the session persisted by a previous page load.
    pub fn restore() -> Self {
        let token = storage::get(TOKEN_KEY);
        let user = storage::get(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok());
        Self { token, user }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The session's validated role, if the profile is loaded and its
    /// role string is recognized.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(User::role)
    }

    pub fn is_student(&self) -> bool {
        self.role() == Some(Role::Student)
    }

    pub fn is_teacher(&self) -> bool {
        self.role() == Some(Role::Teacher)
    }

    /// Where this session lands after authentication.
    pub fn landing_route(&self) -> &'static str {
        routes::landing_route(self.role())
    }

    /// Store a freshly issued token, in memory and durably.
    pub fn set_token(&mut self, token: String) {
        storage::set(TOKEN_KEY, &token);
        self.token = Some(token);
    }

    /// Store the fetched profile, in memory and durably.
    pub fn set_user(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => storage::set(USER_KEY, &raw),
            Err(err) => log::warn!("failed to serialize user profile: {err}"),
        }
        self.user = Some(user);
    }

    /// Drop the session, in memory and durably.
    pub fn clear(&mut self) {
        storage::remove(TOKEN_KEY);
        storage::remove(USER_KEY);
        self.token = None;
        self.user = None;
    }
}

/// Authenticate against the backend.
///
/// On success the returned token is stored, the profile is fetched, and
/// the role's landing route is returned for the caller to navigate to.
///
/// # Errors
///
/// Propagates the backend failure (bad credentials, transport) without
/// touching local state; the login form reports it.
pub async fn login<A: AuthApi>(
    api: &A,
    state: &mut AuthState,
    credentials: &LoginRequest,
) -> Result<&'static str, ApiError> {
    let response = api.login(credentials).await?;
    state.set_token(response.key);
    fetch_user(api, state).await;
    Ok(state.landing_route())
}

/// End the session.
///
/// The backend is notified on a best-effort basis; local state is cleared
/// no matter what, so a dead network can never leave a stale session
/// behind. Returns the login route.
pub async fn logout<A: AuthApi>(api: &A, state: &mut AuthState) -> &'static str {
    if let Err(err) = api.logout().await {
        log::warn!("logout request failed, clearing local session anyway: {err}");
    }
    state.clear();
    routes::LOGIN
}

/// Fetch and store the current user's profile.
///
/// No-op without a token. A failed fetch means the token no longer
/// authenticates, so the session degrades through [`logout`].
pub async fn fetch_user<A: AuthApi>(api: &A, state: &mut AuthState) {
    if state.token.is_none() {
        return;
    }
    match api.current_user().await {
        Ok(user) => state.set_user(user),
        Err(err) => {
            log::warn!("failed to fetch user profile: {err}");
            logout(api, state).await;
        }
    }
}

/// Change the account password. Pure forward: failures propagate to the
/// form, success changes no local state.
///
/// # Errors
///
/// Propagates the backend failure for UI-level reporting.
pub async fn change_password<A: AuthApi>(
    api: &A,
    request: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    api.change_password(request).await
}
