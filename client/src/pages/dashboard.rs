//! Dashboard page for signed-in users.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. `RouteGuard` keeps anonymous
//! visitors out; once mounted in the browser the page refreshes the user
//! object from `/api/profile` so a stale persisted copy is replaced.

use leptos::prelude::*;

use crate::net::types::user_display_name;
use crate::state::auth::{AuthState, AuthStore};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            let _ = store.fetch_profile().await;
        });
    }

    let greeting = move || {
        let state = auth.get();
        let name = state.user.as_ref().and_then(user_display_name).map(str::to_owned);
        name.map_or_else(|| "Welcome back".to_owned(), |n| format!("Welcome back, {n}"))
    };

    let on_logout = move |_| {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            store.logout().await;
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>{greeting}</h1>
                <Show when=move || auth.get().is_admin()>
                    <span class="dashboard-badge">"Admin"</span>
                </Show>
                <button class="auth-button auth-button--secondary" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <Show when=move || auth.get().loading>
                <p class="dashboard-status">"Loading profile..."</p>
            </Show>
            <Show when=move || auth.get().error.is_some()>
                <p class="auth-message auth-message--error">{move || auth.get().error.unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
