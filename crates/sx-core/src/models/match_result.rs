use crate::models::rating::RatingSummary;
use crate::models::skill::{OfferedSkill, WantedSkill};
use crate::models::user::User;

use serde::Serialize;
use uuid::Uuid;

/// Public slice of a user record carried in a match result. Email and
/// credential never leave the directory through the match engine.
#[derive(Debug, Clone, Serialize)]
pub struct MatchCandidate {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub bio: Option<String>,
    pub points: i64,
    pub rating: RatingSummary,
    pub skills_offered: Vec<OfferedSkill>,
    pub skills_wanted: Vec<WantedSkill>,
}

impl From<&User> for MatchCandidate {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            location: user.location.clone(),
            bio: user.bio.clone(),
            points: user.points,
            rating: user.rating,
            skills_offered: user.skills_offered.clone(),
            skills_wanted: user.skills_wanted.clone(),
        }
    }
}

/// Derived compatibility between a requester and one candidate.
/// Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub candidate: MatchCandidate,
    /// Skills the candidate offers that the requester wants
    pub offered_matches: Vec<OfferedSkill>,
    /// Skills the candidate wants that the requester offers
    pub wanted_matches: Vec<WantedSkill>,
    pub score: usize,
    pub can_exchange: bool,
}
