pub mod create_user_request;
pub mod search_users_query;
pub mod skill_dto;
pub mod update_profile_request;
pub mod user_dto;
pub mod user_list_response;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
