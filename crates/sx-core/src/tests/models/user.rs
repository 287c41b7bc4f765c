use crate::models::user::STARTING_POINTS;
use crate::{OfferedSkill, User, WantedSkill};

fn test_user() -> User {
    User::new(
        "Ada".to_string(),
        "ada@example.com".to_string(),
        "$2b$12$opaque".to_string(),
        "London".to_string(),
        None,
    )
}

#[test]
fn test_new_user_defaults() {
    let user = test_user();

    assert_eq!(user.points, STARTING_POINTS);
    assert_eq!(user.rating.average, 0.0);
    assert_eq!(user.rating.count, 0);
    assert!(user.skills_offered.is_empty());
    assert!(user.skills_wanted.is_empty());
}

#[test]
fn test_skill_name_iterators() {
    let mut user = test_user();
    user.skills_offered.push(OfferedSkill::new("Rust"));
    user.skills_offered.push(OfferedSkill::new("Go"));
    user.skills_wanted.push(WantedSkill::new("Piano"));

    let offered: Vec<&str> = user.offered_skill_names().collect();
    let wanted: Vec<&str> = user.wanted_skill_names().collect();

    assert_eq!(offered, vec!["Rust", "Go"]);
    assert_eq!(wanted, vec!["Piano"]);
}
