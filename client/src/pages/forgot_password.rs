//! Password-reset request page.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;
use serde_json::Value;

use super::forms::validate_email;
use crate::components::form_status::FormStatus;
use crate::state::auth::{AuthState, AuthStore};

const REQUEST_SENT: &str = "If an account with that email exists, a reset link is on its way.";

/// Message to show after a successful request: the backend's own, else a generic one.
pub(crate) fn sent_message(payload: &Value) -> String {
    payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(REQUEST_SENT)
        .to_owned()
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);
    let sent = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        match validate_email(&email.get_untracked()) {
            Err(message) => notice.set(Some(message)),
            Ok(email_value) => {
                notice.set(None);
                sent.set(None);
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    if let Ok(payload) = store.request_password_reset(&email_value).await {
                        sent.set(Some(sent_message(&payload)));
                    }
                });
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset your password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || auth.get().loading>
                        "Send reset link"
                    </button>
                </form>
                <FormStatus notice/>
                <Show when=move || sent.get().is_some()>
                    <p class="auth-message">{move || sent.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-links">
                    <a href="/reset-password">"I have a reset token"</a>
                    " · "
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
