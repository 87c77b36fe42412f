//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::net::http::{HttpClient, default_transport};
use crate::pages::{
    dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage, reset_password::ResetPasswordPage,
};
use crate::router::{DEFAULT_AUTHED_PATH, LOGIN_PATH};
use crate::state::auth::{AuthState, AuthStore};
use crate::util::navigation::{BrowserNavigator, NavigationBridge, Navigator};
use crate::util::storage::{KeyValueStore, LocalStorage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Wires storage, navigation and the HTTP client into one `AuthStore` and
/// provides it, together with the reactive `AuthState`, to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let pending = RwSignal::new(None::<String>);

    let storage: Arc<dyn KeyValueStore> = Arc::new(LocalStorage);
    let navigator: Arc<dyn Navigator> = Arc::new(BrowserNavigator::new(pending));
    let http = Arc::new(HttpClient::new(
        ClientConfig::from_build_env(),
        default_transport(),
        storage.clone(),
        navigator.clone(),
    ));
    let store = AuthStore::new(Arc::new(auth), http, storage, navigator);

    provide_context(auth);
    provide_context(store);

    view! {
        <Stylesheet id="leptos" href="/pkg/authdesk.css"/>
        <Title text="Authdesk"/>

        <Router>
            <NavigationBridge pending/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_AUTHED_PATH/> }/>
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <RouteGuard path=LOGIN_PATH><LoginPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <RouteGuard path="/register"><RegisterPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RouteGuard path=DEFAULT_AUTHED_PATH><DashboardPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("forgot-password")
                        view=|| view! { <RouteGuard path="/forgot-password"><ForgotPasswordPage/></RouteGuard> }
                    />
                    <Route
                        path=StaticSegment("reset-password")
                        view=|| view! { <RouteGuard path="/reset-password"><ResetPasswordPage/></RouteGuard> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
