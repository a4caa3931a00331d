mod healthcheck;
mod nextdate;

use salvo::Router;

// Re-export route constants from core
pub use cadence_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, HEALTHCHECK_ROUTE, NEXT_DATE_ROUTE,
};

pub use nextdate::ErrorResponse;

/// ## Summary
/// Constructs the API router with the task date endpoints.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(healthcheck::routes())
        .push(nextdate::routes())
}
