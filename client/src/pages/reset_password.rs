//! Password-reset confirmation page.
//!
//! The emailed link carries the token as `?token=...`; it prefills the token
//! field, which stays editable for tokens pasted by hand.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use super::forms::validate_reset;
use crate::components::form_status::FormStatus;
use crate::state::auth::{AuthState, AuthStore};

const RESET_DONE: &str = "Password updated. You can now sign in.";

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let token = RwSignal::new(query.with_untracked(|q| q.get("token")).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        match validate_reset(&token.get_untracked(), &password.get_untracked(), &confirm.get_untracked()) {
            Err(message) => notice.set(Some(message)),
            Ok((token_value, password_value)) => {
                notice.set(None);
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    if store.confirm_password_reset(&token_value, &password_value).await.is_ok() {
                        done.set(true);
                    }
                });
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Reset token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button
                        class="auth-button"
                        type="submit"
                        disabled=move || auth.get().loading || done.get()
                    >
                        "Update password"
                    </button>
                </form>
                <FormStatus notice/>
                <Show when=move || done.get()>
                    <p class="auth-message">{RESET_DONE}</p>
                </Show>
                <p class="auth-links">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
