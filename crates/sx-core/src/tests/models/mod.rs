mod exchange;
mod exchange_status;
mod skill_level;
mod user;
