pub mod exchange;
pub mod exchange_mode;
pub mod exchange_role;
pub mod exchange_status;
pub mod match_result;
pub mod message;
pub mod rating;
pub mod skill;
pub mod skill_level;
pub mod user;
