//! Session store persisted as the `taskflow_user` snapshot.

use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::{
    domain::User,
    ports::{SessionStore, SessionStoreResult},
};
use crate::storage::{SnapshotStore, USER_KEY, load_json, save_json};

/// Session store writing the signed-in user into a [`SnapshotStore`].
#[derive(Debug)]
pub struct SnapshotSessionStore<S: SnapshotStore> {
    store: Arc<S>,
}

impl<S: SnapshotStore> SnapshotSessionStore<S> {
    /// Creates a session store over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: SnapshotStore> Clone for SnapshotSessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[async_trait]
impl<S: SnapshotStore> SessionStore for SnapshotSessionStore<S> {
    async fn load(&self) -> SessionStoreResult<Option<User>> {
        Ok(load_json(&*self.store, USER_KEY).await?)
    }

    async fn save(&self, user: &User) -> SessionStoreResult<()> {
        Ok(save_json(&*self.store, USER_KEY, user).await?)
    }

    async fn clear(&self) -> SessionStoreResult<()> {
        Ok(self.store.remove(USER_KEY).await?)
    }
}
