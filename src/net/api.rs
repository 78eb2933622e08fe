//! Low-level REST helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token attached as an `Authorization: Token <key>` header when present.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! All paths are relative to the `/api` prefix.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::state::auth::TOKEN_KEY;
#[cfg(feature = "hydrate")]
use crate::util::storage;

#[cfg(feature = "hydrate")]
const BASE: &str = "/api";

/// `GET` a JSON payload. Query parameters are appended when non-empty.
pub async fn get<T: DeserializeOwned>(path: &str, params: &[(&str, &str)]) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::get(&url(path)))
            .query(params.iter().copied());
        let response = request.send().await.map_err(transport)?;
        decode(check(response).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, params);
        Err(ApiError::Unavailable)
    }
}

/// `POST` a JSON body and decode a JSON response.
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(&url(path)))
            .json(body)
            .map_err(transport)?;
        let response = request.send().await.map_err(transport)?;
        decode(check(response).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `POST` a JSON body, ignoring the response payload.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::post(&url(path)))
            .json(body)
            .map_err(transport)?;
        let response = request.send().await.map_err(transport)?;
        check(response).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `POST` with no body, ignoring the response payload.
pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::post(&url(path)))
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST` with no body, decoding a JSON response.
pub async fn post_empty_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::post(&url(path)))
            .send()
            .await
            .map_err(transport)?;
        decode(check(response).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `PUT` a JSON body and decode a JSON response.
pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorized(gloo_net::http::Request::put(&url(path)))
            .json(body)
            .map_err(transport)?;
        let response = request.send().await.map_err(transport)?;
        decode(check(response).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `PATCH` with no body, ignoring the response payload.
pub async fn patch_empty(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::patch(&url(path)))
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `DELETE`, ignoring the response payload.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = authorized(gloo_net::http::Request::delete(&url(path)))
            .send()
            .await
            .map_err(transport)?;
        check(response).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

/// Attach the persisted session token, when one exists.
#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match storage::get(TOKEN_KEY) {
        Some(token) => builder.header("Authorization", &format!("Token {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Turn a non-2xx response into [`ApiError::Status`], preferring the
/// backend's `detail` message over the raw body.
#[cfg(feature = "hydrate")]
async fn check(response: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(ToOwned::to_owned))
        .unwrap_or(body);
    Err(ApiError::Status { status, message })
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
