use chrono::{DateTime, Utc};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// The mutable part of a user: what clients may set on create and update.
/// Identifier and creation timestamp are always assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: String, email: String) -> Result<Self, DomainError> {
        if name.is_empty() || email.is_empty() {
            return Err(DomainError::Validation(
                "Name and email are required".to_string(),
            ));
        }
        Ok(Self { name, email })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_fields() {
        let user = NewUser::new("Ada".into(), "ada@example.com".into()).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn rejects_empty_name_or_email() {
        for (name, email) in [("", "ada@example.com"), ("Ada", ""), ("", "")] {
            match NewUser::new(name.into(), email.into()) {
                Err(DomainError::Validation(message)) => {
                    assert_eq!(message, "Name and email are required")
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn whitespace_is_not_empty() {
        assert!(NewUser::new(" ".into(), " ".into()).is_ok());
    }
}
