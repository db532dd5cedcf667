//! Route Guard
//!
//! Pure decision over a route's metadata and one session snapshot.

use crate::application::session::SessionSnapshot;
use crate::domain::route::{RouteDescriptor, RouteName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RouteName),
}

impl GuardDecision {
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow)
    }
}

/// Decide whether navigating to `route` is allowed
///
/// Rules, first match wins:
/// 1. The diagnostic route is always allowed.
/// 2. `requires_auth` without a token goes to login.
/// 3. `requires_admin` without an admin user goes home.
/// 4. `guest` while logged in goes home.
/// 5. Otherwise allowed.
pub fn evaluate(route: &RouteDescriptor, snapshot: &SessionSnapshot) -> GuardDecision {
    if route.name == RouteName::TestApi {
        return GuardDecision::Allow;
    }

    let meta = route.meta;
    if meta.requires_auth && !snapshot.is_logged_in() {
        return GuardDecision::Redirect(RouteName::Login);
    }
    if meta.requires_admin && !snapshot.is_admin() {
        return GuardDecision::Redirect(RouteName::Home);
    }
    if meta.guest && snapshot.is_logged_in() {
        return GuardDecision::Redirect(RouteName::Home);
    }

    GuardDecision::Allow
}
