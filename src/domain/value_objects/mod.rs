use std::fmt;

use crate::domain::errors::DomainError;

/// Identifier of a user as it arrives in a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::Validation("User ID is required".to_string()));
        }
        raw.parse::<i64>()
            .map(UserId)
            .map_err(|_| DomainError::Validation("Invalid user ID format".to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
