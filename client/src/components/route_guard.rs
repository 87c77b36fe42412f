//! Route-level access check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page is wrapped in `RouteGuard`. The decision is made in an
//! effect so it only runs in the browser, where the persisted token lives;
//! the server renders the guarded page empty and hydration fills it in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::router::{GuardDecision, check_navigation};
use crate::state::auth::AuthStore;

#[component]
pub fn RouteGuard(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);

    Effect::new(move || match check_navigation(path, store.has_stored_token()) {
        GuardDecision::Proceed => allowed.set(true),
        GuardDecision::Redirect(to) => {
            log::debug!("guard redirect {path} -> {to}");
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
