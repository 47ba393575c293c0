use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{NewUser, User},
    repositories::UserRepository,
    value_objects::UserId,
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        let changes = NewUser::new(request.name, request.email)?;
        let user = self
            .repo
            .update(request.id, &changes)
            .await?
            .ok_or_else(DomainError::user_not_found)?;
        tracing::info!(user_id = user.id, "user updated");
        Ok(user)
    }
}
