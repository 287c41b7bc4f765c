use crate::{ApiError, ApiResult};

use sx_core::{OfferedSkill, SkillLevel, WantedSkill};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct OfferedSkillDto {
    pub skill: String,
    pub level: Option<String>,
    pub description: Option<String>,
    pub hourly_rate: Option<i64>,
}

impl OfferedSkillDto {
    pub fn into_model(self) -> ApiResult<OfferedSkill> {
        if self.skill.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "skill name must not be empty".to_string(),
                field: Some("skill".into()),
            });
        }
        let level = match self.level {
            Some(ref value) => SkillLevel::from_str(value)?,
            None => SkillLevel::Intermediate,
        };
        Ok(OfferedSkill {
            skill: self.skill,
            level,
            description: self.description,
            hourly_rate: self.hourly_rate.unwrap_or(0),
        })
    }
}

impl From<OfferedSkill> for OfferedSkillDto {
    fn from(skill: OfferedSkill) -> Self {
        Self {
            skill: skill.skill,
            level: Some(skill.level.as_str().to_string()),
            description: skill.description,
            hourly_rate: Some(skill.hourly_rate),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WantedSkillDto {
    pub skill: String,
    pub level: Option<String>,
    pub description: Option<String>,
}

impl WantedSkillDto {
    pub fn into_model(self) -> ApiResult<WantedSkill> {
        if self.skill.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "skill name must not be empty".to_string(),
                field: Some("skill".into()),
            });
        }
        let level = match self.level {
            Some(ref value) => SkillLevel::from_str(value)?,
            None => SkillLevel::Beginner,
        };
        Ok(WantedSkill {
            skill: self.skill,
            level,
            description: self.description,
        })
    }
}

impl From<WantedSkill> for WantedSkillDto {
    fn from(skill: WantedSkill) -> Self {
        Self {
            skill: skill.skill,
            level: Some(skill.level.as_str().to_string()),
            description: skill.description,
        }
    }
}
