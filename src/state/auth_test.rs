use super::*;

use std::cell::Cell;

use futures::executor::block_on;

use crate::net::types::LoginResponse;

// =============================================================
// Test fixtures
// =============================================================

struct FakeApi {
    login: Result<LoginResponse, ApiError>,
    logout: Result<(), ApiError>,
    user: Result<User, ApiError>,
    change_password: Result<(), ApiError>,
    login_calls: Cell<usize>,
    logout_calls: Cell<usize>,
    user_calls: Cell<usize>,
}

impl FakeApi {
    fn new(user: Result<User, ApiError>) -> Self {
        Self {
            login: Ok(LoginResponse { key: "tok-1".to_owned() }),
            logout: Ok(()),
            user,
            change_password: Ok(()),
            login_calls: Cell::new(0),
            logout_calls: Cell::new(0),
            user_calls: Cell::new(0),
        }
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, _credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout.clone()
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.user_calls.set(self.user_calls.get() + 1);
        self.user.clone()
    }

    async fn change_password(&self, _request: &ChangePasswordRequest) -> Result<(), ApiError> {
        self.change_password.clone()
    }
}

fn user_with_role(role: &str) -> User {
    User {
        pk: 7,
        email: "user@example.com".to_owned(),
        first_name: "Alex".to_owned(),
        last_name: "Ivanov".to_owned(),
        middle_name: "P".to_owned(),
        role: Some(role.to_owned()),
    }
}

fn credentials() -> LoginRequest {
    LoginRequest {
        email: "user@example.com".to_owned(),
        password: "hunter2".to_owned(),
    }
}

fn transport_error() -> ApiError {
    ApiError::Transport("connection reset".to_owned())
}

// =============================================================
// State basics
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.role().is_none());
}

#[test]
fn is_authenticated_tracks_token() {
    let mut state = AuthState::default();
    state.set_token("tok".to_owned());
    assert!(state.is_authenticated());
    state.clear();
    assert!(!state.is_authenticated());
}

#[test]
fn role_comparison_is_case_insensitive() {
    let mut state = AuthState::default();
    state.set_user(user_with_role("STUDENT"));
    assert!(state.is_student());
    assert!(!state.is_teacher());

    state.set_user(user_with_role("Teacher"));
    assert!(state.is_teacher());
    assert!(!state.is_student());
}

#[test]
fn unrecognized_role_yields_no_flags() {
    let mut state = AuthState::default();
    state.set_user(user_with_role("ADMIN"));
    assert!(state.role().is_none());
    assert!(!state.is_student());
    assert!(!state.is_teacher());
    assert_eq!(state.landing_route(), routes::HOME);
}

#[test]
fn landing_route_follows_role() {
    let mut state = AuthState::default();
    state.set_user(user_with_role("STUDENT"));
    assert_eq!(state.landing_route(), routes::MY_STREAMS);
    state.set_user(user_with_role("TEACHER"));
    assert_eq!(state.landing_route(), routes::MY_TOPICS);
}

// =============================================================
// Storage mirroring and restore
// =============================================================

#[test]
fn mutations_mirror_to_storage() {
    let mut state = AuthState::default();
    state.set_token("tok-9".to_owned());
    state.set_user(user_with_role("STUDENT"));

    assert_eq!(storage::get(TOKEN_KEY).as_deref(), Some("tok-9"));
    assert!(storage::get(USER_KEY).is_some());

    state.clear();
    assert!(storage::get(TOKEN_KEY).is_none());
    assert!(storage::get(USER_KEY).is_none());
}

#[test]
fn restore_reads_persisted_session() {
    let mut previous = AuthState::default();
    previous.set_token("tok-42".to_owned());
    previous.set_user(user_with_role("TEACHER"));

    let restored = AuthState::restore();
    assert_eq!(restored, previous);
}

#[test]
fn restore_tolerates_corrupt_profile() {
    storage::set(TOKEN_KEY, "tok");
    storage::set(USER_KEY, "{not json");

    let restored = AuthState::restore();
    assert_eq!(restored.token.as_deref(), Some("tok"));
    assert!(restored.user.is_none());
}

#[test]
fn restore_without_storage_is_empty() {
    let restored = AuthState::restore();
    assert_eq!(restored, AuthState::default());
}

// =============================================================
// login
// =============================================================

#[test]
fn login_as_student_lands_on_my_streams() {
    let api = FakeApi::new(Ok(user_with_role("STUDENT")));
    let mut state = AuthState::default();

    let target = block_on(login(&api, &mut state, &credentials())).expect("login");
    assert_eq!(target, routes::MY_STREAMS);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(state.is_student());
    assert_eq!(storage::get(TOKEN_KEY).as_deref(), Some("tok-1"));
}

#[test]
fn login_as_teacher_lands_on_my_topics() {
    let api = FakeApi::new(Ok(user_with_role("TEACHER")));
    let mut state = AuthState::default();

    let target = block_on(login(&api, &mut state, &credentials())).expect("login");
    assert_eq!(target, routes::MY_TOPICS);
}

#[test]
fn login_with_unrecognized_role_lands_on_home() {
    let api = FakeApi::new(Ok(user_with_role("ADMIN")));
    let mut state = AuthState::default();

    let target = block_on(login(&api, &mut state, &credentials())).expect("login");
    assert_eq!(target, routes::HOME);
    assert!(state.is_authenticated());
}

#[test]
fn failed_login_propagates_and_stores_nothing() {
    let mut api = FakeApi::new(Ok(user_with_role("STUDENT")));
    api.login = Err(ApiError::Status { status: 400, message: "bad credentials".to_owned() });
    let mut state = AuthState::default();

    let result = block_on(login(&api, &mut state, &credentials()));
    assert_eq!(result.unwrap_err().status(), Some(400));
    assert_eq!(state, AuthState::default());
    assert!(storage::get(TOKEN_KEY).is_none());
    assert_eq!(api.user_calls.get(), 0);
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_state_and_storage() {
    let api = FakeApi::new(Ok(user_with_role("STUDENT")));
    let mut state = AuthState::default();
    block_on(login(&api, &mut state, &credentials())).expect("login");

    let target = block_on(logout(&api, &mut state));
    assert_eq!(target, routes::LOGIN);
    assert_eq!(state, AuthState::default());
    assert!(storage::get(TOKEN_KEY).is_none());
    assert!(storage::get(USER_KEY).is_none());
}

#[test]
fn logout_clears_state_even_when_request_fails() {
    let mut api = FakeApi::new(Ok(user_with_role("TEACHER")));
    api.logout = Err(transport_error());
    let mut state = AuthState::default();
    block_on(login(&api, &mut state, &credentials())).expect("login");

    let target = block_on(logout(&api, &mut state));
    assert_eq!(target, routes::LOGIN);
    assert_eq!(state, AuthState::default());
    assert!(storage::get(TOKEN_KEY).is_none());
    assert!(storage::get(USER_KEY).is_none());
}

// =============================================================
// fetch_user
// =============================================================

#[test]
fn fetch_user_without_token_is_a_noop() {
    let api = FakeApi::new(Ok(user_with_role("STUDENT")));
    let mut state = AuthState::default();

    block_on(fetch_user(&api, &mut state));
    assert_eq!(api.user_calls.get(), 0);
    assert!(state.user.is_none());
}

#[test]
fn fetch_user_stores_profile() {
    let api = FakeApi::new(Ok(user_with_role("STUDENT")));
    let mut state = AuthState::default();
    state.set_token("tok".to_owned());

    block_on(fetch_user(&api, &mut state));
    assert_eq!(api.user_calls.get(), 1);
    assert!(state.is_student());
    assert!(storage::get(USER_KEY).is_some());
}

#[test]
fn failed_fetch_user_degrades_to_logout() {
    let api = FakeApi::new(Err(transport_error()));
    let mut state = AuthState::default();
    state.set_token("tok".to_owned());

    block_on(fetch_user(&api, &mut state));

    // Indistinguishable from an explicit logout.
    assert_eq!(state, AuthState::default());
    assert!(storage::get(TOKEN_KEY).is_none());
    assert!(storage::get(USER_KEY).is_none());
    assert_eq!(api.logout_calls.get(), 1);
}

// =============================================================
// change_password
// =============================================================

#[test]
fn change_password_propagates_failure() {
    let mut api = FakeApi::new(Ok(user_with_role("STUDENT")));
    api.change_password = Err(ApiError::Status { status: 400, message: "too short".to_owned() });

    let request = ChangePasswordRequest {
        new_password1: "a".to_owned(),
        new_password2: "a".to_owned(),
    };
    let result = block_on(change_password(&api, &request));
    assert_eq!(result.unwrap_err().status(), Some(400));
}

#[test]
fn change_password_success_touches_no_state() {
    let api = FakeApi::new(Ok(user_with_role("STUDENT")));
    let request = ChangePasswordRequest {
        new_password1: "longenough".to_owned(),
        new_password2: "longenough".to_owned(),
    };
    block_on(change_password(&api, &request)).expect("change password");
    assert!(storage::get(TOKEN_KEY).is_none());
    assert!(storage::get(USER_KEY).is_none());
}
