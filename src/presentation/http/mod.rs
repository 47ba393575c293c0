use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::presentation::http::{
    cors::PermissiveCors,
    endpoints::{root::ApiState, users::UsersEndpoints},
};

pub mod cors;
pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

/// Assembles the API routes, the Swagger UI under `/docs` and the CORS
/// layer into one endpoint. `server_url` is advertised in the OpenAPI
/// document.
pub fn build_app(state: Arc<ApiState>, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        UsersEndpoints::new(state),
        "Users API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/docs", ui)
        .nest("/", api_service)
        .with(PermissiveCors)
}
