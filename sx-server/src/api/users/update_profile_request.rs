use crate::{OfferedSkillDto, WantedSkillDto};

use serde::Deserialize;

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub skills_offered: Option<Vec<OfferedSkillDto>>,
    pub skills_wanted: Option<Vec<WantedSkillDto>>,
}
