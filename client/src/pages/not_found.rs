use leptos::prelude::*;

/// Catch-all for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Page not found"</h1>
                <p class="auth-links">
                    <a href="/">"Go home"</a>
                </p>
            </div>
        </div>
    }
}
