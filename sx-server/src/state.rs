use std::sync::Arc;

use sqlx::SqlitePool;
use sx_engine::{
    ExchangeLedger, ExchangeNotifier, ExchangeService, MatchEngine, SqliteExchangeLedger,
    SqliteUserDirectory, UserDirectory,
};

/// Shared application state. The store is constructed here, once, and
/// injected into the core components; nothing holds a global instance.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub exchanges: Arc<ExchangeService>,
    pub matcher: Arc<MatchEngine>,
    pub notifier: Arc<ExchangeNotifier>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let users: Arc<dyn UserDirectory> = Arc::new(SqliteUserDirectory::new(pool.clone()));
        let ledger: Arc<dyn ExchangeLedger> = Arc::new(SqliteExchangeLedger::new(pool.clone()));
        let notifier = Arc::new(ExchangeNotifier::default());

        let exchanges = Arc::new(ExchangeService::new(
            users.clone(),
            ledger,
            notifier.clone(),
        ));
        let matcher = Arc::new(MatchEngine::new(users));

        Self {
            pool,
            exchanges,
            matcher,
            notifier,
        }
    }
}
