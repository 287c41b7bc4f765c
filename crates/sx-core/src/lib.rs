pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::exchange::{Exchange, NewExchange};
pub use models::exchange_mode::ExchangeMode;
pub use models::exchange_role::ExchangeRole;
pub use models::exchange_status::ExchangeStatus;
pub use models::match_result::{MatchCandidate, MatchResult};
pub use models::message::Message;
pub use models::rating::{ExchangeRating, RatingSummary};
pub use models::skill::{OfferedSkill, WantedSkill};
pub use models::skill_level::SkillLevel;
pub use models::user::User;
