use crate::{OfferedSkillDto, WantedSkillDto};

use sx_core::{RatingSummary, User};

use serde::Serialize;

/// User as returned by the API. The credential never leaves the store.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub bio: Option<String>,
    pub points: i64,
    pub skills_offered: Vec<OfferedSkillDto>,
    pub skills_wanted: Vec<WantedSkillDto>,
    pub rating: RatingSummary,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            location: user.location,
            bio: user.bio,
            points: user.points,
            skills_offered: user
                .skills_offered
                .into_iter()
                .map(OfferedSkillDto::from)
                .collect(),
            skills_wanted: user
                .skills_wanted
                .into_iter()
                .map(WantedSkillDto::from)
                .collect(),
            rating: user.rating,
            created_at: user.created_at.timestamp(),
            updated_at: user.updated_at.timestamp(),
        }
    }
}
