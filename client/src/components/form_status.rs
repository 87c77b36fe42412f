//! Error line under the auth forms.
//!
//! Shows the page's own validation notice when set, otherwise the last error
//! recorded by the auth store.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn FormStatus(notice: RwSignal<Option<&'static str>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let message = move || notice.get().map(str::to_owned).or_else(|| auth.get().error);

    view! {
        <Show when=move || message().is_some()>
            <p class="auth-message auth-message--error" role="alert">
                {move || message().unwrap_or_default()}
            </p>
        </Show>
    }
}
