//! Static route table with access annotations.
//!
//! Paths use `:name` placeholders for dynamic segments. The guard matches
//! a concrete location against this table to find the access rules for
//! the view being navigated to.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const CHANGE_PASSWORD: &str = "/change-password";
pub const MY_STREAMS: &str = "/my-streams";
pub const STREAM_TOPICS: &str = "/streams/:stream_id/topics";
pub const MY_TOPICS: &str = "/my-topics";
pub const TOPIC_CREATE: &str = "/topics/create";
pub const TOPIC_EDIT: &str = "/topics/edit/:id";
pub const MY_SUBMISSIONS: &str = "/my-submissions";
pub const SUBMISSION_CREATE: &str = "/topics/:topic_id/submit";
pub const RECEIVED_SUBMISSIONS: &str = "/received-submissions";

/// Access rules for a route.
///
/// `roles: None` on a protected route means any authenticated role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteAccess {
    pub requires_auth: bool,
    pub roles: Option<&'static [Role]>,
}

const PUBLIC: RouteAccess = RouteAccess { requires_auth: false, roles: None };
const AUTHENTICATED: RouteAccess = RouteAccess { requires_auth: true, roles: None };
const STUDENT_ONLY: RouteAccess = RouteAccess { requires_auth: true, roles: Some(&[Role::Student]) };
const TEACHER_ONLY: RouteAccess = RouteAccess { requires_auth: true, roles: Some(&[Role::Teacher]) };

/// One row of the route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub path: &'static str,
    pub access: RouteAccess,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: HOME, access: PUBLIC },
    RouteDef { path: LOGIN, access: PUBLIC },
    RouteDef { path: CHANGE_PASSWORD, access: AUTHENTICATED },
    RouteDef { path: MY_STREAMS, access: STUDENT_ONLY },
    RouteDef { path: STREAM_TOPICS, access: STUDENT_ONLY },
    RouteDef { path: MY_TOPICS, access: TEACHER_ONLY },
    RouteDef { path: TOPIC_CREATE, access: TEACHER_ONLY },
    RouteDef { path: TOPIC_EDIT, access: TEACHER_ONLY },
    RouteDef { path: MY_SUBMISSIONS, access: STUDENT_ONLY },
    RouteDef { path: SUBMISSION_CREATE, access: STUDENT_ONLY },
    RouteDef { path: RECEIVED_SUBMISSIONS, access: TEACHER_ONLY },
];

/// Access rules for a concrete path, or `None` for unknown routes.
pub fn access_for(path: &str) -> Option<&'static RouteAccess> {
    ROUTES
        .iter()
        .find(|route| matches(route.path, path))
        .map(|route| &route.access)
}

/// Landing route for a role after authentication.
pub fn landing_route(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Student) => MY_STREAMS,
        Some(Role::Teacher) => MY_TOPICS,
        None => HOME,
    }
}

/// Segment-wise match of a concrete path against a pattern.
/// `:name` segments match any single non-empty segment.
fn matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segments = segments(pattern);
    let mut path_segments = segments(path);
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) if p.starts_with(':') || p == s => {}
            _ => return false,
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}
