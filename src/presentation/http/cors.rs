use poem::{
    Endpoint, IntoResponse, Middleware, Request, Response, Result,
    http::{HeaderValue, Method, StatusCode, header},
};

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Permissive cross-origin policy: every response carries the CORS headers
/// and `OPTIONS` requests are answered with an empty 200 before routing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveCors;

impl<E: Endpoint> Middleware<E> for PermissiveCors {
    type Output = PermissiveCorsEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        PermissiveCorsEndpoint { inner: ep }
    }
}

pub struct PermissiveCorsEndpoint<E> {
    inner: E,
}

impl<E: Endpoint> Endpoint for PermissiveCorsEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> Result<Self::Output> {
        let mut response = if req.method() == Method::OPTIONS {
            StatusCode::OK.into_response()
        } else {
            match self.inner.call(req).await {
                Ok(output) => output.into_response(),
                Err(err) => err.into_response(),
            }
        };

        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        );
        Ok(response)
    }
}
