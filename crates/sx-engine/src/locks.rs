use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// One async mutex per record id, serializing lifecycle mutations on a
/// given exchange and point/rating mutations on a given user. Entries
/// are tiny and reused; they are never evicted.
#[derive(Default)]
pub struct LockRegistry {
    exchanges: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
    users: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock_exchange(&self, id: Uuid) -> OwnedMutexGuard<()> {
        Self::entry(&self.exchanges, id).await.lock_owned().await
    }

    pub async fn lock_user(&self, id: Uuid) -> OwnedMutexGuard<()> {
        Self::entry(&self.users, id).await.lock_owned().await
    }

    /// Both user locks, lower id first, so two operations touching the
    /// same pair can never deadlock. The ids must be distinct.
    pub async fn lock_user_pair(
        &self,
        a: Uuid,
        b: Uuid,
    ) -> (OwnedMutexGuard<()>, OwnedMutexGuard<()>) {
        debug_assert_ne!(a, b);
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let first_guard = self.lock_user(first).await;
        let second_guard = self.lock_user(second).await;
        (first_guard, second_guard)
    }

    async fn entry(map: &Mutex<HashMap<Uuid, Arc<Mutex<()>>>>, id: Uuid) -> Arc<Mutex<()>> {
        let mut map = map.lock().await;
        map.entry(id).or_default().clone()
    }
}
