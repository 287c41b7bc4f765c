use crate::models::rating::RatingSummary;
use crate::models::skill::{OfferedSkill, WantedSkill};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Balance granted to every new account
pub const STARTING_POINTS: i64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Opaque credential produced by the auth collaborator. Never
    /// computed or verified here.
    pub password_hash: String,
    pub location: String,
    pub bio: Option<String>,

    pub points: i64,
    pub skills_offered: Vec<OfferedSkill>,
    pub skills_wanted: Vec<WantedSkill>,
    pub rating: RatingSummary,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        location: String,
        bio: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            location,
            bio,
            points: STARTING_POINTS,
            skills_offered: Vec::new(),
            skills_wanted: Vec::new(),
            rating: RatingSummary::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Skill names this user teaches
    pub fn offered_skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills_offered.iter().map(|s| s.skill.as_str())
    }

    /// Skill names this user wants to learn
    pub fn wanted_skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills_wanted.iter().map(|s| s.skill.as_str())
    }
}
