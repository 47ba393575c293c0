use std::sync::Arc;

use poem::Body;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    domain::value_objects::UserId,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_user,
        requests::UserPayloadDto,
        responses::{
            CreateUserResponse, DeleteUserResponse, GetUserResponse, ListUsersResponse,
            UpdateUserResponse,
        },
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    /// List every user in store order.
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> ListUsersResponse {
        match self.state.list_users_usecase.execute().await {
            Ok(users) => ListUsersResponse::Ok(Json(users.iter().map(map_user).collect())),
            Err(err) => err.into(),
        }
    }

    #[oai(path = "/user/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> GetUserResponse {
        let id = match UserId::parse(&id.0) {
            Ok(id) => id,
            Err(err) => return err.into(),
        };

        match self.state.get_user_usecase.execute(id).await {
            Ok(user) => GetUserResponse::Ok(Json(map_user(&user))),
            Err(err) => err.into(),
        }
    }

    /// Create a user from a JSON body with `name` and `email`.
    #[oai(path = "/user", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, body: Body) -> CreateUserResponse {
        let payload = match UserPayloadDto::from_body(body).await {
            Ok(payload) => payload,
            Err(err) => return err.into(),
        };
        let request = CreateUserRequest {
            name: payload.name,
            email: payload.email,
        };

        match self.state.create_user_usecase.execute(request).await {
            Ok(user) => CreateUserResponse::Created(Json(map_user(&user))),
            Err(err) => err.into(),
        }
    }

    /// Replace name and email. Identifier and creation time never change.
    #[oai(path = "/user/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(
        &self,
        id: Path<String>,
        body: Body,
    ) -> UpdateUserResponse {
        let id = match UserId::parse(&id.0) {
            Ok(id) => id,
            Err(err) => return err.into(),
        };
        let payload = match UserPayloadDto::from_body(body).await {
            Ok(payload) => payload,
            Err(err) => return err.into(),
        };
        let request = UpdateUserRequest {
            id,
            name: payload.name,
            email: payload.email,
        };

        match self.state.update_user_usecase.execute(request).await {
            Ok(user) => UpdateUserResponse::Ok(Json(map_user(&user))),
            Err(err) => err.into(),
        }
    }

    #[oai(path = "/user/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<String>) -> DeleteUserResponse {
        let id = match UserId::parse(&id.0) {
            Ok(id) => id,
            Err(err) => return err.into(),
        };

        match self.state.delete_user_usecase.execute(id).await {
            Ok(()) => DeleteUserResponse::NoContent,
            Err(err) => err.into(),
        }
    }
}
