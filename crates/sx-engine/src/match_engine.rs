use crate::store::UserDirectory;
use crate::{EngineError, Result as EngineErrorResult};

use sx_core::{MatchCandidate, MatchResult, OfferedSkill, User, WantedSkill};

use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

/// Ranked lists are cut to the strongest candidates
pub const MAX_MATCH_RESULTS: usize = 10;

/// Read-only compatibility ranking over the user directory
pub struct MatchEngine {
    users: Arc<dyn UserDirectory>,
}

impl MatchEngine {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    /// Ranked matches for a user. Fails with `UserNotFound` when the
    /// requester does not exist; has no side effects.
    pub async fn compute_matches(
        &self,
        requester_id: Uuid,
    ) -> EngineErrorResult<Vec<MatchResult>> {
        let requester = self
            .users
            .get_user(requester_id)
            .await?
            .ok_or(EngineError::UserNotFound { id: requester_id })?;

        let candidates = self.users.list_users().await?;

        Ok(rank_matches(&requester, &candidates))
    }
}

/// Score every candidate against the requester.
///
/// A candidate scores one point per offered skill the requester wants
/// and one per wanted skill the requester offers (exact, case-sensitive
/// names). Zero-score candidates and the requester itself are dropped,
/// the rest sort by score descending with candidate id ascending as a
/// deterministic tie-break, cut to `MAX_MATCH_RESULTS`.
pub fn rank_matches(requester: &User, candidates: &[User]) -> Vec<MatchResult> {
    let wanted: HashSet<&str> = requester.wanted_skill_names().collect();
    let offered: HashSet<&str> = requester.offered_skill_names().collect();

    let mut matches: Vec<MatchResult> = candidates
        .iter()
        .filter(|candidate| candidate.id != requester.id)
        .filter_map(|candidate| {
            let offered_matches: Vec<OfferedSkill> = candidate
                .skills_offered
                .iter()
                .filter(|s| wanted.contains(s.skill.as_str()))
                .cloned()
                .collect();
            let wanted_matches: Vec<WantedSkill> = candidate
                .skills_wanted
                .iter()
                .filter(|s| offered.contains(s.skill.as_str()))
                .cloned()
                .collect();

            let score = offered_matches.len() + wanted_matches.len();
            if score == 0 {
                return None;
            }

            Some(MatchResult {
                candidate: MatchCandidate::from(candidate),
                can_exchange: !wanted_matches.is_empty(),
                offered_matches,
                wanted_matches,
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.candidate.id.cmp(&b.candidate.id))
    });
    matches.truncate(MAX_MATCH_RESULTS);

    matches
}
