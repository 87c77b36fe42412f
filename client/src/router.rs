//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` mounts one `<Route>` per entry in [`ROUTES`] and wraps each page
//! in `RouteGuard`, which applies [`guard`] before the page renders. Auth is
//! judged solely by the presence of a persisted token; expiry is left to the
//! backend's 401 handling in `net::http`.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

pub const LOGIN_PATH: &str = "/login";
/// Landing page for authenticated users.
pub const DEFAULT_AUTHED_PATH: &str = "/dashboard";

/// Per-route access flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Only reachable with a stored token.
    pub requires_auth: bool,
    /// Only reachable without a stored token (login, register, ...).
    pub guest: bool,
}

impl RouteMeta {
    pub const OPEN: Self = Self { requires_auth: false, guest: false };
    pub const GUEST: Self = Self { requires_auth: false, guest: true };
    pub const PROTECTED: Self = Self { requires_auth: true, guest: false };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    ForgotPassword,
    ResetPassword,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub page: Page,
    pub meta: RouteMeta,
}

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: LOGIN_PATH, page: Page::Login, meta: RouteMeta::GUEST },
    RouteDescriptor { path: "/register", page: Page::Register, meta: RouteMeta::GUEST },
    RouteDescriptor { path: DEFAULT_AUTHED_PATH, page: Page::Dashboard, meta: RouteMeta::PROTECTED },
    RouteDescriptor { path: "/forgot-password", page: Page::ForgotPassword, meta: RouteMeta::GUEST },
    RouteDescriptor { path: "/reset-password", page: Page::ResetPassword, meta: RouteMeta::GUEST },
];

/// Catch-all for unknown paths.
pub const NOT_FOUND: RouteDescriptor = RouteDescriptor { path: "*", page: Page::NotFound, meta: RouteMeta::OPEN };

/// Static redirects applied before lookup.
pub const REDIRECTS: &[(&str, &str)] = &[("/", DEFAULT_AUTHED_PATH)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Page(RouteDescriptor),
    Redirect(&'static str),
}

/// Map a URL path (query and fragment ignored) to its route.
#[must_use]
pub fn resolve(path: &str) -> Resolution {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
    let path = if path.is_empty() { "/" } else { path };

    if let Some((_, to)) = REDIRECTS.iter().find(|(from, _)| *from == path) {
        return Resolution::Redirect(*to);
    }
    ROUTES
        .iter()
        .find(|r| r.path == path)
        .map_or(Resolution::Page(NOT_FOUND), |r| Resolution::Page(*r))
}

/// Descriptor for a page.
#[must_use]
pub fn descriptor(page: Page) -> RouteDescriptor {
    ROUTES.iter().find(|r| r.page == page).copied().unwrap_or(NOT_FOUND)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether a navigation to a route with `meta` may proceed.
#[must_use]
pub fn guard(meta: RouteMeta, authenticated: bool) -> GuardDecision {
    if meta.requires_auth && !authenticated {
        GuardDecision::Redirect(LOGIN_PATH)
    } else if meta.guest && authenticated {
        GuardDecision::Redirect(DEFAULT_AUTHED_PATH)
    } else {
        GuardDecision::Proceed
    }
}

/// Outcome of navigating to `path`: the static redirect is followed and the
/// guard applied to the page it lands on.
#[must_use]
pub fn check_navigation(path: &str, authenticated: bool) -> GuardDecision {
    match resolve(path) {
        Resolution::Page(route) => guard(route.meta, authenticated),
        Resolution::Redirect(to) => match check_navigation(to, authenticated) {
            GuardDecision::Proceed => GuardDecision::Redirect(to),
            redirect => redirect,
        },
    }
}
