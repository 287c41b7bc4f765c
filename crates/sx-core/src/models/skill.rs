use crate::models::skill_level::SkillLevel;

use serde::{Deserialize, Serialize};

/// A skill a user teaches. `hourly_rate` is in points per hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferedSkill {
    pub skill: String,
    pub level: SkillLevel,
    pub description: Option<String>,
    pub hourly_rate: i64,
}

impl OfferedSkill {
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            level: SkillLevel::Intermediate,
            description: None,
            hourly_rate: 0,
        }
    }
}

/// A skill a user wants to learn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WantedSkill {
    pub skill: String,
    pub level: SkillLevel,
    pub description: Option<String>,
}

impl WantedSkill {
    pub fn new(skill: impl Into<String>) -> Self {
        Self {
            skill: skill.into(),
            level: SkillLevel::Beginner,
            description: None,
        }
    }
}
