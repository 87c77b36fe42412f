//! Auth session store for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `AuthStore` and hands it to pages through context. The
//! store owns the session lifecycle: it hydrates from persisted storage, and
//! every mutation goes through `set_auth`/`clear_auth` so in-memory state,
//! storage and the HTTP client's default `Authorization` header agree.
//!
//! ERROR HANDLING
//! ==============
//! Actions record a display message in `AuthState::error` and also return the
//! typed error. `loading` is reset by a drop guard, so it clears on success,
//! failure, and when the action future is dropped mid-flight.
//!
//! Concurrent actions are not serialized; the last one to finish wins.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use serde_json::Value;

use crate::net::api;
use crate::net::error::{ApiError, failure_message};
use crate::net::http::{AUTHORIZATION, HttpClient, bearer};
use crate::net::types::{AuthResponse, user_role};
use crate::router::{DEFAULT_AUTHED_PATH, LOGIN_PATH};
use crate::util::navigation::Navigator;
use crate::util::storage::{self, KeyValueStore, REFRESH_TOKEN_KEY, TOKEN_KEY, USER_KEY};

/// Session plus action bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Value>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// State restored from persisted storage.
    pub fn from_storage(store: &dyn KeyValueStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = storage::load_json::<Value>(store, USER_KEY).filter(|u| !u.is_null());
        Self { user, token, loading: false, error: None }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().and_then(user_role) == Some("admin")
    }
}

/// Holder for `AuthState`: a signal in the app, a mutex in tests.
pub trait AuthCell: Send + Sync {
    fn snapshot(&self) -> AuthState;
    fn modify(&self, f: &mut dyn FnMut(&mut AuthState));
}

impl AuthCell for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn modify(&self, f: &mut dyn FnMut(&mut AuthState)) {
        self.update(|state| f(state));
    }
}

impl AuthCell for Mutex<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.lock().map(|s| s.clone()).unwrap_or_default()
    }

    fn modify(&self, f: &mut dyn FnMut(&mut AuthState)) {
        if let Ok(mut state) = self.lock() {
            f(&mut *state);
        }
    }
}

/// Marks an action in flight; clears `loading` when dropped.
struct LoadingGuard<'a> {
    state: &'a dyn AuthCell,
}

impl<'a> LoadingGuard<'a> {
    fn begin(state: &'a dyn AuthCell) -> Self {
        state.modify(&mut |s| {
            s.loading = true;
            s.error = None;
        });
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.modify(&mut |s| s.loading = false);
    }
}

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REQUEST_FAILED: &str = "Request failed";
pub const RESET_FAILED: &str = "Reset failed";
pub const PROFILE_FAILED: &str = "Profile fetch failed";
pub const REFRESH_FAILED: &str = "Session refresh failed";

#[derive(Clone)]
pub struct AuthStore {
    state: Arc<dyn AuthCell>,
    http: Arc<HttpClient>,
    storage: Arc<dyn KeyValueStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthStore {
    /// Build the store and hydrate `state` from persisted storage.
    pub fn new(
        state: Arc<dyn AuthCell>,
        http: Arc<HttpClient>,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let restored = AuthState::from_storage(storage.as_ref());
        if let Some(token) = &restored.token {
            http.set_default_header(AUTHORIZATION, &bearer(token));
        }
        state.modify(&mut |s| {
            s.user = restored.user.clone();
            s.token = restored.token.clone();
        });
        Self { state, http, storage, navigator }
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.snapshot()
    }

    #[must_use]
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Token presence in persisted storage, as the route guard sees it.
    #[must_use]
    pub fn has_stored_token(&self) -> bool {
        storage::has_token(self.storage.as_ref())
    }

    /// Install a session in memory, storage, and the HTTP default headers.
    pub fn set_auth(&self, token: &str, user: Option<Value>) {
        self.storage.set(TOKEN_KEY, token);
        storage::save_json(self.storage.as_ref(), USER_KEY, &user);
        self.http.set_default_header(AUTHORIZATION, &bearer(token));
        self.state.modify(&mut |s| {
            s.token = Some(token.to_owned());
            s.user = user.clone();
        });
    }

    /// Drop the session from memory, storage, and the HTTP default headers.
    pub fn clear_auth(&self) {
        storage::clear_session(self.storage.as_ref());
        self.http.remove_default_header(AUTHORIZATION);
        self.state.modify(&mut |s| {
            s.token = None;
            s.user = None;
        });
    }

    /// Sign in and navigate to the dashboard.
    ///
    /// # Errors
    ///
    /// Backend/transport failures, or `ApiError::MissingToken` when the
    /// response carries no token. Session state is untouched on error.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.tracked(LOGIN_FAILED, async {
            let resp = api::login(&self.http, email, password).await?;
            self.establish(&resp)?;
            Ok::<_, ApiError>(resp)
        })
        .await
    }

    /// Create an account, sign in, and navigate to the dashboard.
    ///
    /// # Errors
    ///
    /// Same as [`AuthStore::login`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.tracked(REGISTRATION_FAILED, async {
            let resp = api::register(&self.http, name, email, password).await?;
            self.establish(&resp)?;
            Ok::<_, ApiError>(resp)
        })
        .await
    }

    /// Best-effort backend logout, then clear the local session and go to `/login`.
    pub async fn logout(&self) {
        let refresh_token = self.storage.get(REFRESH_TOKEN_KEY);
        if let Err(e) = api::logout(&self.http, refresh_token.as_deref()).await {
            log::debug!("backend logout failed, clearing local session anyway: {e}");
        }
        self.clear_auth();
        self.navigator.push(LOGIN_PATH);
    }

    /// Ask the backend to start a password reset for `email`.
    ///
    /// # Errors
    ///
    /// Backend or transport failures.
    pub async fn request_password_reset(&self, email: &str) -> Result<Value, ApiError> {
        self.tracked(REQUEST_FAILED, api::request_password_reset(&self.http, email)).await
    }

    /// Complete a password reset with the emailed `token`.
    ///
    /// # Errors
    ///
    /// Backend or transport failures.
    pub async fn confirm_password_reset(&self, token: &str, new_password: &str) -> Result<Value, ApiError> {
        self.tracked(RESET_FAILED, api::confirm_password_reset(&self.http, token, new_password)).await
    }

    /// Reload the user object for the current token.
    ///
    /// # Errors
    ///
    /// Backend, transport, or body-shape failures.
    pub async fn fetch_profile(&self) -> Result<Value, ApiError> {
        self.tracked(PROFILE_FAILED, async {
            let user = api::fetch_profile(&self.http).await?;
            storage::save_json(self.storage.as_ref(), USER_KEY, &user);
            self.state.modify(&mut |s| s.user = Some(user.clone()));
            Ok::<_, ApiError>(user)
        })
        .await
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// `ApiError::MissingToken` when no refresh token is stored or none is
    /// returned; otherwise backend or transport failures.
    pub async fn refresh_session(&self) -> Result<String, ApiError> {
        self.tracked(REFRESH_FAILED, async {
            let refresh_token = self.storage.get(REFRESH_TOKEN_KEY).ok_or(ApiError::MissingToken)?;
            let resp = api::refresh(&self.http, &refresh_token).await?;
            let token = resp.bearer_token().ok_or(ApiError::MissingToken)?.to_owned();
            self.storage.set(TOKEN_KEY, &token);
            self.http.set_default_header(AUTHORIZATION, &bearer(&token));
            self.state.modify(&mut |s| s.token = Some(token.clone()));
            Ok::<_, ApiError>(token)
        })
        .await
    }

    /// Persist the session carried by a login/register response and move on.
    fn establish(&self, resp: &AuthResponse) -> Result<(), ApiError> {
        let token = resp.bearer_token().ok_or(ApiError::MissingToken)?;
        self.set_auth(token, resp.user.clone());
        if let Some(refresh) = resp.refresh() {
            self.storage.set(REFRESH_TOKEN_KEY, refresh);
        }
        self.navigator.push(DEFAULT_AUTHED_PATH);
        Ok(())
    }

    /// Run `work` with loading/error bookkeeping.
    async fn tracked<T>(&self, fallback: &str, work: impl Future<Output = Result<T, ApiError>>) -> Result<T, ApiError> {
        let _loading = LoadingGuard::begin(self.state.as_ref());
        let result = work.await;
        if let Err(err) = &result {
            let message = failure_message(err, fallback);
            log::warn!("auth action failed: {message}");
            self.state.modify(&mut |s| s.error = Some(message.clone()));
        }
        result
    }
}
