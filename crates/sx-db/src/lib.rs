pub mod connection;
pub mod error;
pub mod repositories;
pub mod schema;

pub use connection::connect;
pub use error::{DbError, Result};
pub use repositories::exchange_repository::ExchangeRepository;
pub use repositories::user_repository::UserRepository;
pub use schema::init_schema;
