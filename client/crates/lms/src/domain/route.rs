//! Route Table
//!
//! Static client-side routes and the metadata the guard reads.
//! The table is fixed at compile time and never mutated.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    /// Diagnostic page, reachable regardless of session state
    TestApi,
    Students,
    StudentDetail,
    Questions,
    MyAnswers,
    AdminQuestions,
    NotFound,
}

impl RouteName {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use RouteName::*;
        match self {
            Home => "home",
            Login => "login",
            TestApi => "test-api",
            Students => "students",
            StudentDetail => "student-detail",
            Questions => "questions",
            MyAnswers => "my-answers",
            AdminQuestions => "admin-questions",
            NotFound => "not-found",
        }
    }

    /// Route descriptor for this name
    pub fn descriptor(&self) -> &'static RouteDescriptor {
        ROUTES
            .iter()
            .find(|route| route.name == *self)
            .unwrap_or(&ROUTES[ROUTES.len() - 1])
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access flags of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
    /// Only for visitors who are not logged in (e.g. the login page)
    pub guest: bool,
}

impl RouteMeta {
    pub const OPEN: Self = Self {
        requires_auth: false,
        requires_admin: false,
        guest: false,
    };
    pub const AUTH: Self = Self {
        requires_auth: true,
        ..Self::OPEN
    };
    pub const ADMIN: Self = Self {
        requires_auth: true,
        requires_admin: true,
        guest: false,
    };
    pub const GUEST: Self = Self {
        guest: true,
        ..Self::OPEN
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path pattern; `:name` segments capture, `*` matches anything
    pub path: &'static str,
    pub name: RouteName,
    /// View component rendered for this route
    pub view: &'static str,
    pub meta: RouteMeta,
}

impl RouteDescriptor {
    /// Concrete path for this route, filling `:name` segments from `params`
    ///
    /// Returns `None` when a parameter is missing.
    pub fn href(&self, params: &BTreeMap<String, String>) -> Option<String> {
        if self.path == CATCH_ALL {
            return None;
        }
        let mut out = String::new();
        for segment in segments(self.path) {
            out.push('/');
            match segment.strip_prefix(':') {
                Some(param) => out.push_str(params.get(param)?),
                None => out.push_str(segment),
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Some(out)
    }

    fn capture(&self, path_segments: &[&str]) -> Option<BTreeMap<String, String>> {
        if self.path == CATCH_ALL {
            return Some(BTreeMap::new());
        }
        let pattern: Vec<&str> = segments(self.path).collect();
        if pattern.len() != path_segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (expected, actual) in pattern.iter().zip(path_segments) {
            match expected.strip_prefix(':') {
                Some(param) => {
                    params.insert(param.to_string(), (*actual).to_string());
                }
                None if expected == actual => {}
                None => return None,
            }
        }
        Some(params)
    }
}

const CATCH_ALL: &str = "*";

/// The application's routes, matched in order; the catch-all stays last.
pub static ROUTES: [RouteDescriptor; 9] = [
    RouteDescriptor {
        path: "/",
        name: RouteName::Home,
        view: "HomeView",
        meta: RouteMeta::AUTH,
    },
    RouteDescriptor {
        path: "/login",
        name: RouteName::Login,
        view: "LoginView",
        meta: RouteMeta::GUEST,
    },
    RouteDescriptor {
        path: "/test-api",
        name: RouteName::TestApi,
        view: "TestApiView",
        meta: RouteMeta::OPEN,
    },
    RouteDescriptor {
        path: "/students",
        name: RouteName::Students,
        view: "StudentsView",
        meta: RouteMeta::AUTH,
    },
    RouteDescriptor {
        path: "/students/:id",
        name: RouteName::StudentDetail,
        view: "StudentDetailView",
        meta: RouteMeta::AUTH,
    },
    RouteDescriptor {
        path: "/questions",
        name: RouteName::Questions,
        view: "QuestionsView",
        meta: RouteMeta::AUTH,
    },
    RouteDescriptor {
        path: "/my-answers",
        name: RouteName::MyAnswers,
        view: "StudentAnswersView",
        meta: RouteMeta::AUTH,
    },
    RouteDescriptor {
        path: "/admin/questions",
        name: RouteName::AdminQuestions,
        view: "AdminQuestionsView",
        meta: RouteMeta::ADMIN,
    },
    RouteDescriptor {
        path: CATCH_ALL,
        name: RouteName::NotFound,
        view: "MaintenanceView",
        meta: RouteMeta::OPEN,
    },
];

/// A path resolved against [`ROUTES`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    pub route: &'static RouteDescriptor,
    /// Normalized path (no query/fragment, no trailing slash)
    pub path: String,
    pub params: BTreeMap<String, String>,
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Strip query string and fragment, collapse repeated and trailing slashes
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let joined: Vec<&str> = segments(path).collect();
    format!("/{}", joined.join("/"))
}

/// Resolve a path to its route; unknown paths land on the catch-all
pub fn match_path(path: &str) -> MatchedRoute {
    let path = normalize_path(path);
    let path_segments: Vec<&str> = segments(&path).collect();

    for route in ROUTES.iter() {
        if let Some(params) = route.capture(&path_segments) {
            return MatchedRoute {
                route,
                path: path.clone(),
                params,
            };
        }
    }

    // The catch-all always captures, this is only reached if it was removed.
    MatchedRoute {
        route: RouteName::NotFound.descriptor(),
        path,
        params: BTreeMap::new(),
    }
}
