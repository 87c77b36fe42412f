//! Registration page. A successful sign-up signs the user in directly.

use leptos::prelude::*;

use super::forms::validate_register;
use crate::components::form_status::FormStatus;
use crate::state::auth::{AuthState, AuthStore};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<AuthStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().loading {
            return;
        }
        let checked = validate_register(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        match checked {
            Err(message) => notice.set(Some(message)),
            Ok((name_value, email_value, password_value)) => {
                notice.set(None);
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    let _ = store.register(&name_value, &email_value, &password_value).await;
                });
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || auth.get().loading>
                        "Register"
                    </button>
                </form>
                <FormStatus notice/>
                <p class="auth-links">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
