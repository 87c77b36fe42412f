//! Client configuration resolved at build time.
//!
//! The API base URL is baked into the WASM bundle from `API_BASE_URL`. When
//! unset, requests go to the page's own origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Build-time environment variable selecting the backend origin.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without trailing slash; empty means same-origin.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Config from the `API_BASE_URL` value captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("API_BASE_URL"))
    }

    /// Blank or missing values select same-origin requests.
    #[must_use]
    pub fn with_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned();
        Self { api_base_url }
    }

    /// Join an API path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}
