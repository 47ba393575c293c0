use std::sync::Arc;

use crate::domain::{errors::DomainError, models::User, repositories::UserRepository};

pub struct ListUsersUseCase {
    repo: Arc<dyn UserRepository>,
}

impl ListUsersUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<User>, DomainError> {
        let users = self.repo.list().await?;
        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }
}
