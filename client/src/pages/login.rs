//! Login page: email + password sign-in.

use leptos::prelude::*;

use super::forms::validate_login;
use crate::components::form_status::FormStatus;
use crate::state::auth::{AuthState, AuthStore};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Err(message) => notice.set(Some(message)),
            Ok((email_value, password_value)) => {
                notice.set(None);
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    let _ = store.login(&email_value, &password_value).await;
                });
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || auth.get().loading>
                        {move || if auth.get().loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <FormStatus notice/>
                <p class="auth-links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    " · "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
