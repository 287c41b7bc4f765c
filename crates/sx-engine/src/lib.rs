pub mod error;
pub mod events;
pub mod lifecycle;
pub mod locks;
pub mod match_engine;
pub mod store;


pub use error::{EngineError, Result};
pub use events::{ExchangeEvent, ExchangeNotifier};
pub use lifecycle::ExchangeService;
pub use locks::LockRegistry;
pub use match_engine::{MAX_MATCH_RESULTS, MatchEngine, rank_matches};
pub use store::sqlite::{SqliteExchangeLedger, SqliteUserDirectory};
pub use store::{ExchangeLedger, UserDirectory};
