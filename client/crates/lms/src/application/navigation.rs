//! Navigation State
//!
//! Current location plus at most one pending redirect. The gateway queues
//! the login redirect here on 401; the router consumes it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::route::{RouteName, match_path, normalize_path};

#[derive(Debug)]
struct NavigationState {
    current: String,
    pending: Option<RouteName>,
}

#[derive(Debug)]
pub struct Navigation {
    state: Mutex<NavigationState>,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigation {
    pub fn new(initial_path: &str) -> Self {
        Self {
            state: Mutex::new(NavigationState {
                current: normalize_path(initial_path),
                pending: None,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, NavigationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn current_path(&self) -> String {
        self.state().current.clone()
    }

    /// Commit a location
    ///
    /// Arriving on the login view by any route settles a pending login
    /// redirect.
    pub fn set_current(&self, path: &str) {
        let mut state = self.state();
        state.current = normalize_path(path);
        if state.pending == Some(RouteName::Login)
            && match_path(&state.current).route.name == RouteName::Login
        {
            state.pending = None;
            tracing::debug!("Reached login view, pending redirect settled");
        }
    }

    /// Queue a redirect to the login view
    ///
    /// Returns `false` when nothing was queued: the current location is
    /// already the login view, or a login redirect is already pending.
    pub fn request_login_redirect(&self) -> bool {
        let mut state = self.state();

        if match_path(&state.current).route.name == RouteName::Login {
            tracing::debug!("Already on login view, redirect skipped");
            return false;
        }
        if state.pending == Some(RouteName::Login) {
            tracing::debug!("Login redirect already pending");
            return false;
        }

        state.pending = Some(RouteName::Login);
        tracing::info!(from = %state.current, "Login redirect queued");
        true
    }

    pub fn pending_redirect(&self) -> Option<RouteName> {
        self.state().pending
    }

    /// Remove and return the pending redirect
    pub fn take_pending_redirect(&self) -> Option<RouteName> {
        self.state().pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_redirect_queued_once() {
        let nav = Navigation::new("/questions");
        assert!(nav.request_login_redirect());
        assert!(!nav.request_login_redirect());
        assert_eq!(nav.take_pending_redirect(), Some(RouteName::Login));
        assert_eq!(nav.take_pending_redirect(), None);
    }

    #[test]
    fn test_no_redirect_from_login() {
        let nav = Navigation::new("/login?next=/questions");
        assert!(!nav.request_login_redirect());
        assert_eq!(nav.pending_redirect(), None);
    }

    #[test]
    fn test_reaching_login_settles_pending_redirect() {
        let nav = Navigation::new("/questions");
        assert!(nav.request_login_redirect());

        nav.set_current("/login/");
        assert_eq!(nav.pending_redirect(), None);

        // A later 401 starts a fresh episode
        nav.set_current("/students");
        assert!(nav.request_login_redirect());
        assert_eq!(nav.pending_redirect(), Some(RouteName::Login));
    }

    #[test]
    fn test_other_locations_keep_pending_redirect() {
        let nav = Navigation::new("/questions");
        assert!(nav.request_login_redirect());
        nav.set_current("/my-answers");
        assert_eq!(nav.pending_redirect(), Some(RouteName::Login));
    }

    #[test]
    fn test_set_current_normalizes() {
        let nav = Navigation::default();
        assert_eq!(nav.current_path(), "/");
        nav.set_current("/students/3/");
        assert_eq!(nav.current_path(), "/students/3");
    }
}
