use std::sync::Arc;

use crate::domain::{errors::DomainError, repositories::UserRepository, value_objects::UserId};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: UserId) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::user_not_found());
        }
        tracing::info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::models::NewUser, infrastructure::repositories::InMemoryUserRepository};

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let created = repo
            .insert(&NewUser::new("Ada".into(), "ada@example.com".into()).unwrap())
            .await
            .unwrap();
        let usecase = DeleteUserUseCase::new(repo);

        usecase.execute(UserId(created.id)).await.unwrap();
        let again = usecase.execute(UserId(created.id)).await;

        assert!(matches!(again, Err(DomainError::NotFound(_))));
    }
}
