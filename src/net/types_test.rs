use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parse_is_case_insensitive() {
    assert_eq!("STUDENT".parse::<Role>(), Ok(Role::Student));
    assert_eq!("student".parse::<Role>(), Ok(Role::Student));
    assert_eq!("Teacher".parse::<Role>(), Ok(Role::Teacher));
}

#[test]
fn role_parse_rejects_unknown_values() {
    let err = "ADMIN".parse::<Role>().unwrap_err();
    assert_eq!(err, ParseRoleError("ADMIN".to_owned()));
    assert!("".parse::<Role>().is_err());
}

#[test]
fn user_role_handles_missing_and_invalid() {
    let mut user = User {
        pk: 1,
        email: "a@b.c".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        middle_name: "C".to_owned(),
        role: None,
    };
    assert_eq!(user.role(), None);

    user.role = Some("superuser".to_owned());
    assert_eq!(user.role(), None);

    user.role = Some("TEACHER".to_owned());
    assert_eq!(user.role(), Some(Role::Teacher));
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn login_response_carries_the_token_key() {
    let response: LoginResponse = serde_json::from_str(r#"{"key":"abc123"}"#).expect("decode");
    assert_eq!(response.key, "abc123");
}

#[test]
fn user_decodes_without_role() {
    let user: User = serde_json::from_str(
        r#"{"pk":5,"email":"s@uni.edu","first_name":"A","last_name":"B","middle_name":"C"}"#,
    )
    .expect("decode");
    assert_eq!(user.pk, 5);
    assert!(user.role.is_none());
}

#[test]
fn status_enums_match_backend_spelling() {
    assert_eq!(
        serde_json::from_str::<TopicStatus>(r#""AVAILABLE""#).expect("decode"),
        TopicStatus::Available
    );
    assert_eq!(
        serde_json::from_str::<SubmissionStatus>(r#""PENDING""#).expect("decode"),
        SubmissionStatus::Pending
    );
    assert_eq!(
        serde_json::to_string(&SubmissionStatus::Rejected).expect("encode"),
        r#""REJECTED""#
    );
}

#[test]
fn submission_decodes_from_backend_payload() {
    let payload = serde_json::json!({
        "id": 11,
        "status": "PENDING",
        "topic": {
            "id": 2,
            "title": "Graph algorithms",
            "description": "Shortest paths",
            "status": "AVAILABLE",
            "teacher": {
                "first_name": "T",
                "last_name": "Eacher",
                "middle_name": "",
                "email": "t@uni.edu"
            },
            "stream": {
                "id": 1,
                "name": "CS-2026",
                "is_active": true,
                "specialty": {"code": "CS", "name": "Computer Science"},
                "academic_year": "2025/2026",
                "semester": 2,
                "course_number": 4
            }
        },
        "student": {
            "first_name": "S",
            "last_name": "Tudent",
            "middle_name": "",
            "email": "s@uni.edu"
        },
        "student_vision": "I want to work on A*.",
        "created_at": "2026-02-11T10:00:00Z"
    });

    let submission: Submission = serde_json::from_value(payload).expect("decode");
    assert_eq!(submission.status, SubmissionStatus::Pending);
    assert_eq!(submission.topic.stream.specialty.code, "CS");
    assert_eq!(submission.student_vision, "I want to work on A*.");
}

#[test]
fn submission_vision_defaults_to_empty() {
    let payload = serde_json::json!({
        "id": 12,
        "status": "REJECTED",
        "topic": {
            "id": 2,
            "title": "Graph algorithms",
            "description": "",
            "status": "TAKEN",
            "teacher": {"first_name": "T", "last_name": "E", "middle_name": "", "email": "t@uni.edu"},
            "stream": {
                "id": 1,
                "name": "CS-2026",
                "is_active": true,
                "specialty": {"code": "CS", "name": "Computer Science"},
                "academic_year": "2025/2026",
                "semester": 2,
                "course_number": 4
            }
        },
        "student": {"first_name": "S", "last_name": "T", "middle_name": "", "email": "s@uni.edu"},
        "created_at": "2026-02-11T10:00:00Z"
    });

    let submission: Submission = serde_json::from_value(payload).expect("decode");
    assert!(submission.student_vision.is_empty());
}
