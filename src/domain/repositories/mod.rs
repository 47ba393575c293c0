use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, User},
    value_objects::UserId,
};

/// Access to the `users` table. Every mutation is a single statement, so
/// "not found" is decided by the same statement that performs the change.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    async fn get(&self, id: UserId) -> anyhow::Result<Option<User>>;
    async fn insert(&self, user: &NewUser) -> anyhow::Result<User>;
    /// Returns `None` when no row has the given id.
    async fn update(&self, id: UserId, user: &NewUser) -> anyhow::Result<Option<User>>;
    /// Returns `false` when no row has the given id.
    async fn delete(&self, id: UserId) -> anyhow::Result<bool>;
}
