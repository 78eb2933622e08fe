use super::*;

#[test]
fn public_routes_have_no_requirements() {
    for path in [HOME, LOGIN] {
        let access = access_for(path).expect("route");
        assert!(!access.requires_auth);
        assert!(access.roles.is_none());
    }
}

#[test]
fn change_password_allows_any_authenticated_role() {
    let access = access_for(CHANGE_PASSWORD).expect("route");
    assert!(access.requires_auth);
    assert!(access.roles.is_none());
}

#[test]
fn student_routes_are_student_only() {
    for path in ["/my-streams", "/streams/12/topics", "/my-submissions", "/topics/4/submit"] {
        let access = access_for(path).expect("route");
        assert_eq!(access.roles, Some(&[Role::Student][..]));
    }
}

#[test]
fn teacher_routes_are_teacher_only() {
    for path in ["/my-topics", "/topics/create", "/topics/edit/9", "/received-submissions"] {
        let access = access_for(path).expect("route");
        assert_eq!(access.roles, Some(&[Role::Teacher][..]));
    }
}

#[test]
fn static_segments_win_over_placeholders() {
    // "/topics/create" must not be mistaken for "/topics/:topic_id/submit".
    let access = access_for("/topics/create").expect("route");
    assert_eq!(access.roles, Some(&[Role::Teacher][..]));
}

#[test]
fn trailing_slashes_are_tolerated() {
    assert!(access_for("/my-streams/").is_some());
    assert!(access_for("/streams/3/topics/").is_some());
}

#[test]
fn unknown_paths_have_no_annotation() {
    assert!(access_for("/streams/3").is_none());
    assert!(access_for("/streams/3/topics/extra").is_none());
    assert!(access_for("/no-such-page").is_none());
}

#[test]
fn landing_route_per_role() {
    assert_eq!(landing_route(Some(Role::Student)), MY_STREAMS);
    assert_eq!(landing_route(Some(Role::Teacher)), MY_TOPICS);
    assert_eq!(landing_route(None), HOME);
}
