//! Wire types mirroring the backend's JSON payloads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

/// User category determining which routes and actions are permitted.
///
/// The backend stores roles as upper-case strings; parsing is
/// case-insensitive and rejects anything outside the closed set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
}

/// Error for a role string outside the closed set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("student") {
            Ok(Self::Student)
        } else if s.eq_ignore_ascii_case("teacher") {
            Ok(Self::Teacher)
        } else {
            Err(ParseRoleError(s.to_owned()))
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Teacher => write!(f, "teacher"),
        }
    }
}

/// The authenticated user's profile, as returned by the current-user
/// endpoint and persisted alongside the token.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub pk: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// Raw role string; may be absent for accounts created without one.
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// The user's validated role, or `None` when the stored string is
    /// missing or outside the closed set.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|raw| raw.parse().ok())
    }
}

/// Abbreviated user shape nested inside topics and submissions.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserSummary {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Specialty {
    pub code: String,
    pub name: String,
}

/// A course stream the user belongs to.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stream {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub specialty: Specialty,
    pub academic_year: String,
    pub semester: i32,
    pub course_number: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicStatus {
    Available,
    Taken,
}

/// A topic offered by a teacher within a stream.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TopicStatus,
    pub teacher: UserSummary,
    pub stream: Stream,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

/// A student's application for a topic.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Submission {
    pub id: i64,
    pub status: SubmissionStatus,
    pub topic: Topic,
    pub student: UserSummary,
    #[serde(default)]
    pub student_vision: String,
    pub created_at: String,
}

/// A teacher's topic together with the submissions it received.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TopicWithSubmissions {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TopicStatus,
    pub teacher: UserSummary,
    pub stream: Stream,
    pub submissions: Vec<Submission>,
}

// ---- request/response bodies ----

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: an opaque session token.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct LoginResponse {
    pub key: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ChangePasswordRequest {
    pub new_password1: String,
    pub new_password2: String,
}

/// Body for creating or updating a topic.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TopicPayload {
    pub title: String,
    pub description: String,
    pub stream_id: i64,
}

/// Body for submitting an application for a topic.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SubmissionPayload {
    pub topic_id: i64,
    pub student_vision: String,
}
