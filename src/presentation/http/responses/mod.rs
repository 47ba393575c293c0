use poem_openapi::{
    ApiResponse, Object,
    payload::{Json, PlainText},
};

use crate::domain::errors::DomainError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Object, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

#[derive(ApiResponse)]
pub enum ListUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserDto>>),
    #[oai(status = 500)]
    InternalServerError(PlainText<String>),
}

#[derive(ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 404)]
    NotFound(PlainText<String>),
    #[oai(status = 500)]
    InternalServerError(PlainText<String>),
}

#[derive(ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 500)]
    InternalServerError(PlainText<String>),
}

#[derive(ApiResponse)]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 404)]
    NotFound(PlainText<String>),
    #[oai(status = 500)]
    InternalServerError(PlainText<String>),
}

#[derive(ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(PlainText<String>),
    #[oai(status = 404)]
    NotFound(PlainText<String>),
    #[oai(status = 500)]
    InternalServerError(PlainText<String>),
}

/// Store failures are logged with their full chain; clients only see a
/// generic message.
fn internal_error(err: anyhow::Error) -> PlainText<String> {
    tracing::error!(error = ?err, "user store operation failed");
    PlainText(INTERNAL_ERROR_MESSAGE.to_string())
}

impl From<DomainError> for ListUsersResponse {
    fn from(err: DomainError) -> Self {
        let err = match err {
            DomainError::Other(err) => err,
            other => other.into(),
        };
        Self::InternalServerError(internal_error(err))
    }
}

impl From<DomainError> for CreateUserResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => Self::BadRequest(PlainText(message)),
            DomainError::Other(err) => Self::InternalServerError(internal_error(err)),
            other => Self::InternalServerError(internal_error(other.into())),
        }
    }
}

macro_rules! impl_from_domain_error {
    ($($response:ident),+ $(,)?) => {
        $(
            impl From<DomainError> for $response {
                fn from(err: DomainError) -> Self {
                    match err {
                        DomainError::Validation(message) => Self::BadRequest(PlainText(message)),
                        DomainError::NotFound(message) => Self::NotFound(PlainText(message)),
                        DomainError::Other(err) => Self::InternalServerError(internal_error(err)),
                    }
                }
            }
        )+
    };
}

impl_from_domain_error!(
    GetUserResponse,
    UpdateUserResponse,
    DeleteUserResponse,
);
