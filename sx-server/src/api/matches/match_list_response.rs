use sx_core::MatchResult;

use serde::Serialize;

/// Match results are derived values and serialize as-is
#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<MatchResult>,
}
