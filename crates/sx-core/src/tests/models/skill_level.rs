use crate::SkillLevel;

use std::str::FromStr;

#[test]
fn test_round_trips_through_str() {
    for level in [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ] {
        assert_eq!(SkillLevel::from_str(level.as_str()).unwrap(), level);
    }
}

#[test]
fn test_unknown_level_is_an_error() {
    assert!(SkillLevel::from_str("Expert").is_err());
    assert!(SkillLevel::from_str("guru").is_err());
}
