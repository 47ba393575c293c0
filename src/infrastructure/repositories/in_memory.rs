use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::{
    models::{NewUser, User},
    repositories::UserRepository,
    value_objects::UserId,
};

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, User>,
    last_id: i64,
}

/// Store double with the same id and timestamp assignment rules as the
/// `users` table: ids are never reused, rows come back in insertion order.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id.0).cloned())
    }

    async fn insert(&self, user: &NewUser) -> anyhow::Result<User> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let row = User {
            id: table.last_id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
        };
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: UserId, user: &NewUser) -> anyhow::Result<Option<User>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id.0).map(|row| {
            row.name = user.name.clone();
            row.email = user.email.clone();
            row.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> anyhow::Result<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id.0).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids_and_lists_in_insertion_order() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(&new_user("a", "a@x")).await.unwrap();
        let second = repo.insert(&new_user("b", "b@x")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        let names: Vec<_> = repo.list().await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(&new_user("a", "a@x")).await.unwrap();
        assert!(repo.delete(UserId(first.id)).await.unwrap());

        let second = repo.insert(&new_user("b", "b@x")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn update_keeps_id_and_created_at() {
        let repo = InMemoryUserRepository::new();
        let created = repo.insert(&new_user("a", "a@x")).await.unwrap();

        let updated = repo
            .update(UserId(created.id), &new_user("b", "b@x"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "b");
        assert_eq!(repo.get(UserId(created.id)).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn missing_rows_report_absence() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.get(UserId(1)).await.unwrap().is_none());
        assert!(repo.update(UserId(1), &new_user("a", "a@x")).await.unwrap().is_none());
        assert!(!repo.delete(UserId(1)).await.unwrap());
    }
}
