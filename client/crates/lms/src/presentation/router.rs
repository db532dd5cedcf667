//! Router
//!
//! Resolves a path, runs the guard against one session snapshot and
//! commits the final location to [`Navigation`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::application::guard::{GuardDecision, evaluate};
use crate::application::navigation::Navigation;
use crate::application::session::SessionStore;
use crate::domain::route::{MatchedRoute, RouteDescriptor, RouteName, match_path, normalize_path};

/// Guard redirects followed before giving up
const MAX_REDIRECTS: usize = 3;

/// Where a navigation ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub route: &'static RouteDescriptor,
    /// Committed path
    pub path: String,
    pub params: BTreeMap<String, String>,
    /// Path originally requested
    pub requested: String,
    /// Redirects taken on the way, in order
    pub redirects: Vec<RouteName>,
}

impl NavigationOutcome {
    #[inline]
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }

    #[inline]
    pub fn name(&self) -> RouteName {
        self.route.name
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    session: Arc<SessionStore>,
    navigation: Arc<Navigation>,
}

impl Router {
    pub fn new(session: Arc<SessionStore>, navigation: Arc<Navigation>) -> Self {
        Self {
            session,
            navigation,
        }
    }

    pub fn current_path(&self) -> String {
        self.navigation.current_path()
    }

    /// Route of the current location
    pub fn current(&self) -> MatchedRoute {
        match_path(&self.navigation.current_path())
    }

    /// Navigate to `path`, following guard redirects
    pub fn navigate(&self, path: &str) -> NavigationOutcome {
        let snapshot = self.session.snapshot();
        let requested = path.to_string();
        let (matched, redirects) = resolve(path, |route| evaluate(route, &snapshot));

        self.navigation.set_current(&matched.path);
        tracing::info!(
            requested = %requested,
            route = %matched.route.name,
            path = %matched.path,
            redirected = !redirects.is_empty(),
            "Navigated"
        );

        NavigationOutcome {
            route: matched.route,
            path: matched.path,
            params: matched.params,
            requested,
            redirects,
        }
    }

    /// Follow the redirect queued by the gateway, if any
    pub fn apply_pending_redirect(&self) -> Option<NavigationOutcome> {
        let target = self.navigation.take_pending_redirect()?;
        let href = target.descriptor().href(&BTreeMap::new())?;
        Some(self.navigate(&href))
    }
}

/// Match `path` and follow `decide` until it allows, or give up on not-found
fn resolve(
    path: &str,
    decide: impl Fn(&RouteDescriptor) -> GuardDecision,
) -> (MatchedRoute, Vec<RouteName>) {
    let mut matched = match_path(path);
    let mut redirects = Vec::new();

    loop {
        let target = match decide(matched.route) {
            GuardDecision::Allow => break,
            GuardDecision::Redirect(target) => target,
        };

        if redirects.len() == MAX_REDIRECTS {
            tracing::warn!(requested = %path, "Too many guard redirects, landing on not-found");
            matched = MatchedRoute {
                route: RouteName::NotFound.descriptor(),
                path: normalize_path(path),
                params: BTreeMap::new(),
            };
            break;
        }

        tracing::debug!(from = %matched.path, to = %target, "Guard redirect");
        redirects.push(target);
        let href = target.descriptor().href(&BTreeMap::new());
        matched = match_path(href.as_deref().unwrap_or("/"));
    }

    (matched, redirects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::{UserId, UserRole};

    fn router() -> (Router, Arc<SessionStore>, Arc<Navigation>) {
        let session = Arc::new(SessionStore::in_memory());
        let navigation = Arc::new(Navigation::default());
        (
            Router::new(session.clone(), navigation.clone()),
            session,
            navigation,
        )
    }

    #[test]
    fn test_anonymous_redirected_to_login() {
        let (router, _, navigation) = router();
        let outcome = router.navigate("/questions");

        assert_eq!(outcome.name(), RouteName::Login);
        assert_eq!(outcome.redirects, vec![RouteName::Login]);
        assert_eq!(outcome.requested, "/questions");
        assert_eq!(navigation.current_path(), "/login");
    }

    #[test]
    fn test_student_on_admin_route_goes_home() {
        let (router, session, _) = router();
        session
            .set_session("T", &User::new(UserId::new(2), "siswa", UserRole::Student))
            .unwrap();

        let outcome = router.navigate("/admin/questions");
        assert_eq!(outcome.name(), RouteName::Home);
        assert_eq!(outcome.path, "/");
    }

    #[test]
    fn test_param_route_allowed_for_student() {
        let (router, session, _) = router();
        session
            .set_session("T", &User::new(UserId::new(2), "siswa", UserRole::Student))
            .unwrap();
        let outcome = router.navigate("/students/5?tab=answers");
        assert_eq!(outcome.name(), RouteName::StudentDetail);
        assert_eq!(outcome.params.get("id").map(String::as_str), Some("5"));
        assert!(!outcome.was_redirected());
        assert_eq!(router.current_path(), "/students/5");
    }

    #[test]
    fn test_unknown_path_is_open() {
        let (router, _, _) = router();
        let outcome = router.navigate("/nowhere");
        assert_eq!(outcome.name(), RouteName::NotFound);
        assert_eq!(outcome.path, "/nowhere");
    }

    #[test]
    fn test_redirect_loop_lands_on_requested_path() {
        let (matched, redirects) = resolve("/questions?page=2", |route| {
            if route.name == RouteName::NotFound {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(RouteName::Home)
            }
        });

        assert_eq!(matched.route.name, RouteName::NotFound);
        assert_eq!(matched.path, "/questions");
        assert_eq!(redirects.len(), MAX_REDIRECTS);
    }

    #[test]
    fn test_landing_on_login_settles_pending_redirect() {
        let (router, session, navigation) = router();
        navigation.set_current("/questions");
        assert!(navigation.request_login_redirect());

        // Guard sends the anonymous visitor to login on its own
        assert_eq!(router.navigate("/questions").name(), RouteName::Login);
        assert_eq!(navigation.pending_redirect(), None);

        session
            .set_session("T", &User::new(UserId::new(2), "siswa", UserRole::Student))
            .unwrap();
        assert_eq!(router.navigate("/students").name(), RouteName::Students);
        assert!(router.apply_pending_redirect().is_none());
        assert_eq!(router.current_path(), "/students");
    }

    #[test]
    fn test_apply_pending_redirect() {
        let (router, _, navigation) = router();
        navigation.set_current("/my-answers");
        assert!(router.apply_pending_redirect().is_none());

        assert!(navigation.request_login_redirect());
        let outcome = router.apply_pending_redirect().unwrap();
        assert_eq!(outcome.name(), RouteName::Login);
        assert_eq!(router.current().route.name, RouteName::Login);
        assert!(router.apply_pending_redirect().is_none());
    }
}
