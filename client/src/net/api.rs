//! REST calls against the auth backend.
//!
//! Each helper serializes its request body, sends it through the shared
//! [`HttpClient`] and decodes the typed response. Session side effects live in
//! `state::auth`, not here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::http::HttpClient;
use super::types::{
    AuthResponse, LoginRequest, PasswordResetConfirm, PasswordResetRequest, ProfileResponse, RefreshRequest,
    RegisterRequest,
};

pub const LOGIN_ENDPOINT: &str = "/api/login";
pub const REGISTER_ENDPOINT: &str = "/api/register";
pub const LOGOUT_ENDPOINT: &str = "/api/logout";
pub const PROFILE_ENDPOINT: &str = "/api/profile";
pub const REFRESH_ENDPOINT: &str = "/api/token/refresh";
pub const PASSWORD_RESET_REQUEST_ENDPOINT: &str = "/api/password-reset/request";
pub const PASSWORD_RESET_CONFIRM_ENDPOINT: &str = "/api/password-reset/confirm";

fn encode<T: Serialize>(body: &T) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `POST /api/login`.
///
/// # Errors
///
/// Transport or status failures. Any success body is accepted; one without a
/// token is returned as-is and the caller decides whether that is fatal.
pub async fn login(http: &HttpClient, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = encode(&LoginRequest { email, password })?;
    let resp = http.post(LOGIN_ENDPOINT, Some(body)).await?;
    Ok(AuthResponse::from_body(&resp.body))
}

/// `POST /api/register`.
///
/// # Errors
///
/// Same as [`login`].
pub async fn register(http: &HttpClient, name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let body = encode(&RegisterRequest { name, email, password })?;
    let resp = http.post(REGISTER_ENDPOINT, Some(body)).await?;
    Ok(AuthResponse::from_body(&resp.body))
}

/// `POST /api/logout`, optionally revoking the refresh token as well.
///
/// # Errors
///
/// Transport or status failures.
pub async fn logout(http: &HttpClient, refresh_token: Option<&str>) -> Result<(), ApiError> {
    let body = refresh_token.map(|refresh_token| encode(&RefreshRequest { refresh_token })).transpose()?;
    http.post(LOGOUT_ENDPOINT, body).await.map(|_| ())
}

/// `POST /api/password-reset/request`. Returns the backend payload verbatim.
///
/// # Errors
///
/// Transport or status failures.
pub async fn request_password_reset(http: &HttpClient, email: &str) -> Result<Value, ApiError> {
    let body = encode(&PasswordResetRequest { email })?;
    Ok(http.post(PASSWORD_RESET_REQUEST_ENDPOINT, Some(body)).await?.body)
}

/// `POST /api/password-reset/confirm`. Returns the backend payload verbatim.
///
/// # Errors
///
/// Transport or status failures.
pub async fn confirm_password_reset(http: &HttpClient, token: &str, password: &str) -> Result<Value, ApiError> {
    let body = encode(&PasswordResetConfirm { token, password })?;
    Ok(http.post(PASSWORD_RESET_CONFIRM_ENDPOINT, Some(body)).await?.body)
}

/// `GET /api/profile` for the bearer of the current token.
///
/// # Errors
///
/// Transport, status, or body-shape failures.
pub async fn fetch_profile(http: &HttpClient) -> Result<Value, ApiError> {
    let profile: ProfileResponse = decode(http.get(PROFILE_ENDPOINT).await?.body)?;
    Ok(profile.user)
}

/// `POST /api/token/refresh`.
///
/// # Errors
///
/// Same as [`login`].
pub async fn refresh(http: &HttpClient, refresh_token: &str) -> Result<AuthResponse, ApiError> {
    let body = encode(&RefreshRequest { refresh_token })?;
    let resp = http.post(REFRESH_ENDPOINT, Some(body)).await?;
    Ok(AuthResponse::from_body(&resp.body))
}
