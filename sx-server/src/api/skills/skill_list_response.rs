use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<String>,
}
