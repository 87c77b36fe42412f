//! Request and response bodies exchanged with the auth backend.
//!
//! DESIGN
//! ======
//! The user object is kept as opaque JSON; only `role` is ever inspected.
//! Token-bearing responses are accepted under three field names until the
//! backend contract settles on one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest<'a> {
    pub email: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetConfirm<'a> {
    pub token: &'a str,
    pub password: &'a str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Body of login, register and token-refresh responses.
///
/// Built with [`AuthResponse::from_body`], which never fails: a missing token
/// is reported later as `ApiError::MissingToken`, not as a decode error.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token_camel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    /// Pick the known fields out of any JSON body. Fields of the wrong type
    /// and non-object bodies (`null`, strings, arrays) read as absent.
    #[must_use]
    pub fn from_body(body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            access_token: text("access_token"),
            token: text("token"),
            access_token_camel: text("accessToken"),
            refresh_token: text("refresh_token"),
            user: body.get("user").filter(|u| !u.is_null()).cloned(),
            message: text("message"),
        }
    }

    /// First non-empty of `access_token`, `token`, `accessToken`.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        [&self.access_token, &self.token, &self.access_token_camel]
            .into_iter()
            .filter_map(|t| t.as_deref())
            .find(|t| !t.is_empty())
    }

    /// Non-empty refresh token, if issued.
    #[must_use]
    pub fn refresh(&self) -> Option<&str> {
        self.refresh_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Body of `GET /api/profile`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProfileResponse {
    pub user: Value,
}

/// `role` of an opaque user object.
#[must_use]
pub fn user_role(user: &Value) -> Option<&str> {
    user.get("role").and_then(Value::as_str)
}

/// Display name for an opaque user object: `name`, else `email`.
#[must_use]
pub fn user_display_name(user: &Value) -> Option<&str> {
    ["name", "email"]
        .into_iter()
        .filter_map(|k| user.get(k).and_then(Value::as_str))
        .find(|v| !v.is_empty())
}
