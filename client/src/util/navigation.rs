//! Navigation seam between non-UI code and the browser/router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth store needs client-side route changes after login/logout, while
//! the HTTP layer needs a full page load to `/login` on 401. Both go through
//! `Navigator` so they can be observed in tests without a browser.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

pub trait Navigator: Send + Sync {
    /// Path component of the current location, e.g. `/login`.
    fn current_path(&self) -> String;
    /// Client-side navigation handled by the router.
    fn push(&self, path: &str);
    /// Full page navigation.
    fn assign(&self, path: &str);
}

/// Browser navigator. `push` requests are queued on a signal and performed by
/// [`NavigationBridge`], which must be mounted inside `<Router>`.
#[derive(Clone, Copy, Debug)]
pub struct BrowserNavigator {
    pending: RwSignal<Option<String>>,
}

impl BrowserNavigator {
    #[must_use]
    pub fn new(pending: RwSignal<Option<String>>) -> Self {
        Self { pending }
    }

    #[must_use]
    pub fn pending(&self) -> RwSignal<Option<String>> {
        self.pending
    }
}

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_else(|| "/".to_owned())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            "/".to_owned()
        }
    }

    fn push(&self, path: &str) {
        self.pending.set(Some(path.to_owned()));
    }

    fn assign(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().set_href(path).is_err() {
                    log::warn!("failed to navigate to {path}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}

/// Drains queued `push` requests into the router.
#[component]
pub fn NavigationBridge(pending: RwSignal<Option<String>>) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// Test navigator recording every call.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    path: std::sync::Mutex<String>,
    pub pushes: std::sync::Mutex<Vec<String>>,
    pub assigns: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self { path: std::sync::Mutex::new(path.to_owned()), ..Self::default() }
    }

    pub fn pushes(&self) -> Vec<String> {
        self.pushes.lock().unwrap().clone()
    }

    pub fn assigns(&self) -> Vec<String> {
        self.assigns.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.lock().unwrap().clone()
    }

    fn push(&self, path: &str) {
        self.pushes.lock().unwrap().push(path.to_owned());
    }

    fn assign(&self, path: &str) {
        self.assigns.lock().unwrap().push(path.to_owned());
        *self.path.lock().unwrap() = path.to_owned();
    }
}
