//! Shared setup for HTTP integration tests.

use cadence_app::app::api::routes;
use salvo::Router;
use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};

/// Base URL handed to `TestClient`; nothing listens on it.
pub const BASE_URL: &str = "http://127.0.0.1:5800";

/// ## Summary
/// Builds the router the binary serves.
#[must_use]
pub fn app() -> Router {
    Router::new().push(routes())
}

/// Status and body of a test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

/// ## Summary
/// Sends a GET request for `path_and_query` to a fresh app router.
#[must_use]
pub async fn get(path_and_query: &str) -> TestResponse {
    let mut response = TestClient::get(format!("{BASE_URL}{path_and_query}"))
        .send(app())
        .await;

    let status = response
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.take_string().await.unwrap_or_default();

    TestResponse { status, body }
}
