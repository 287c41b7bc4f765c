pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::{ApiError, Result as ApiResult},
    exchanges::{
        create_exchange_request::CreateExchangeRequest,
        create_message_request::CreateMessageRequest,
        exchange_dto::ExchangeDto,
        exchange_list_response::ExchangeListResponse,
        exchange_response::ExchangeResponse,
        exchanges::{
            create_exchange, create_message, list_exchanges, rate_exchange, update_status,
        },
        message_dto::MessageDto,
        message_response::MessageResponse,
        rate_exchange_request::RateExchangeRequest,
        rating_dto::RatingDto,
        update_status_request::UpdateStatusRequest,
    },
    extractors::user_id::UserId,
    matches::{match_list_response::MatchListResponse, matches::get_matches},
    skills::{skill_list_response::SkillListResponse, skills::available_skills},
    users::{
        create_user_request::CreateUserRequest,
        search_users_query::SearchUsersQuery,
        skill_dto::{OfferedSkillDto, WantedSkillDto},
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{create_user, get_user, search_users, update_profile},
    },
};
pub use routes::build_router;
pub use state::AppState;
