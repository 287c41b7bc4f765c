use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchUsersQuery {
    /// Substring match on offered skill names, case-insensitive
    pub skill: Option<String>,
    /// Substring match on location, case-insensitive
    pub location: Option<String>,
    /// Exact offered-skill level (e.g. "advanced")
    pub level: Option<String>,
}
