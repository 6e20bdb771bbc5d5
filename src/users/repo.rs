use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use super::model::User;

/// A user behind its own lock. Inventory and profile mutations go through it.
pub type SharedUser = Arc<Mutex<User>>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_all_users(&self) -> anyhow::Result<Vec<User>>;
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<SharedUser>>;
    /// Inserts or replaces the user with the same id.
    async fn save(&self, user: User) -> anyhow::Result<SharedUser>;
}

#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, SharedUser>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get_all_users(&self) -> anyhow::Result<Vec<User>> {
        let handles: Vec<SharedUser> = self.users.read().await.values().cloned().collect();
        let mut out = Vec::with_capacity(handles.len());
        for handle in handles {
            out.push(handle.lock().await.clone());
        }
        Ok(out)
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<SharedUser>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> anyhow::Result<SharedUser> {
        let mut users = self.users.write().await;
        if let Some(existing) = users.get(&user.id).cloned() {
            // a busy user must not stall lookups of everyone else
            drop(users);
            *existing.lock().await = user;
            return Ok(existing);
        }
        let id = user.id;
        let handle = Arc::new(Mutex::new(user));
        users.insert(id, handle.clone());
        Ok(handle)
    }
}
