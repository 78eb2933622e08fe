//! Authentication endpoints and the session store's API seam.

use super::api;
use super::error::ApiError;
use super::types::{ChangePasswordRequest, LoginRequest, LoginResponse, User};

/// Backend authentication operations.
///
/// The session store is generic over this trait so its flows can run
/// against a fake in tests; [`HttpApi`] is the real implementation.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError>;
}

/// [`AuthApi`] over the real REST backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl AuthApi for HttpApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        api::post("/auth/login/", credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        api::post_empty("/auth/logout/").await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        api::get("/auth/user/", &[]).await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        api::post_unit("/auth/password/change/", request).await
    }
}
