//! URL-addressable views and their access guards. The checkout flow leaves
//! the app for an external origin and comes back at a fixed path, so views
//! are keyed by pathname and kept in sync with the History API.

use wasm_bindgen::JsValue;

use crate::models::User;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    PremiumInsights,
    /// Where the payment processor sends the browser after checkout.
    CheckoutReturn,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "/dashboard" => Route::Dashboard,
            "/premium-insights" => Route::PremiumInsights,
            "/premium-success" => Route::CheckoutReturn,
            _ => Route::Login,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/dashboard",
            Route::PremiumInsights => "/premium-insights",
            Route::CheckoutReturn => "/premium-success",
        }
    }
}

/// The guard table: maps what was requested to what is shown, given the
/// current identity. Pure so redirects stay predictable.
pub fn resolve(requested: Route, user: Option<&User>) -> Route {
    match requested {
        Route::Login => Route::Login,
        Route::Dashboard | Route::CheckoutReturn => match user {
            Some(_) => requested,
            None => Route::Login,
        },
        Route::PremiumInsights => match user {
            None => Route::Login,
            Some(user) if user.is_premium => Route::PremiumInsights,
            Some(_) => Route::Dashboard,
        },
    }
}

pub fn initial() -> Route {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .map(|path| Route::parse(&path))
        .unwrap_or(Route::Login)
}

/// User-initiated navigation: adds a history entry.
pub fn push(route: Route) {
    if let Some(history) = history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(route.path()));
    }
}

/// Guard redirects and the checkout-return hop: replaces the current entry
/// so the back button cannot re-enter the redirecting view.
pub fn replace(route: Route) {
    if let Some(history) = history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()));
    }
}

fn history() -> Option<web_sys::History> {
    web_sys::window().and_then(|window| window.history().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(premium: bool) -> User {
        User {
            id: 1,
            email: "a@b.com".to_string(),
            name: None,
            is_premium: premium,
        }
    }

    #[test]
    fn known_paths_parse() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/premium-insights"), Route::PremiumInsights);
        assert_eq!(Route::parse("/premium-success"), Route::CheckoutReturn);
    }

    #[test]
    fn trailing_slash_and_unknown_paths() {
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Login);
        assert_eq!(Route::parse("/no-such-view"), Route::Login);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Login,
            Route::Dashboard,
            Route::PremiumInsights,
            Route::CheckoutReturn,
        ] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }

    #[test]
    fn guarded_views_need_identity() {
        assert_eq!(resolve(Route::Dashboard, None), Route::Login);
        assert_eq!(resolve(Route::CheckoutReturn, None), Route::Login);
        assert_eq!(resolve(Route::PremiumInsights, None), Route::Login);
    }

    #[test]
    fn insights_need_premium() {
        let free = user(false);
        let premium = user(true);
        assert_eq!(
            resolve(Route::PremiumInsights, Some(&free)),
            Route::Dashboard
        );
        assert_eq!(
            resolve(Route::PremiumInsights, Some(&premium)),
            Route::PremiumInsights
        );
    }

    #[test]
    fn entry_view_is_unguarded() {
        assert_eq!(resolve(Route::Login, None), Route::Login);
        assert_eq!(resolve(Route::Login, Some(&user(true))), Route::Login);
    }

    #[test]
    fn authenticated_requests_pass_through() {
        let free = user(false);
        assert_eq!(resolve(Route::Dashboard, Some(&free)), Route::Dashboard);
        assert_eq!(
            resolve(Route::CheckoutReturn, Some(&free)),
            Route::CheckoutReturn
        );
    }
}
