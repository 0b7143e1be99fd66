use super::*;

fn group() -> Group {
    Group {
        id: "g1".to_owned(),
        name: "Weekly grinders".to_owned(),
        description: String::new(),
        created_by: "owner".to_owned(),
        member_ids: vec!["owner".to_owned(), "m1".to_owned()],
    }
}

fn user(uid: &str) -> User {
    User { uid: uid.to_owned(), name: uid.to_owned() }
}

#[test]
fn creator_is_admin() {
    assert!(is_group_admin(&group(), Some(&user("owner"))));
}

#[test]
fn other_user_is_not_admin() {
    assert!(!is_group_admin(&group(), Some(&user("m1"))));
}

#[test]
fn unresolved_user_is_not_admin() {
    assert!(!is_group_admin(&group(), None));
}

#[test]
fn admin_can_remove_members_but_not_self() {
    let owner = user("owner");
    assert!(can_remove_member(&group(), Some(&owner), "m1"));
    assert!(!can_remove_member(&group(), Some(&owner), "owner"));
}

#[test]
fn non_admin_cannot_remove_anyone() {
    let member = user("m1");
    assert!(!can_remove_member(&group(), Some(&member), "owner"));
    assert!(!can_remove_member(&group(), Some(&member), "m1"));
}

#[test]
fn creator_badge_matches_created_by() {
    assert!(is_creator(&group(), "owner"));
    assert!(!is_creator(&group(), "m1"));
}
