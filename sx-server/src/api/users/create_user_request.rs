use crate::{OfferedSkillDto, WantedSkillDto};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// Opaque credential produced by the auth collaborator
    pub password_hash: String,
    pub location: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub skills_offered: Vec<OfferedSkillDto>,
    #[serde(default)]
    pub skills_wanted: Vec<WantedSkillDto>,
}
