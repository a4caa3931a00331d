use cadence_core::constants::NEXT_DATE_ROUTE_COMPONENT;
use cadence_rule::parse_date;
use cadence_service::next_occurrence;
use salvo::{Request, Response, Router, handler, http::StatusCode, writing::Json, writing::Text};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// GET /api/nextdate - Computes the next occurrence of a recurring task
///
/// Query parameters: `now` (the reference date), `date` (the task's anchor
/// date) and `repeat` (the rule). Dates are `YYYYMMDD`.
///
/// ## Errors
/// Returns HTTP 400 with an `ErrorResponse` for missing or malformed dates and
/// malformed rules.
/// Returns HTTP 500 if the computation breaks an internal invariant.
#[handler]
#[tracing::instrument(skip_all)]
async fn next_date_handler(req: &mut Request, res: &mut Response) {
    let now = req.query::<String>("now").unwrap_or_default();
    let date = req.query::<String>("date").unwrap_or_default();
    let repeat = req.query::<String>("repeat").unwrap_or_default();

    tracing::debug!(%now, %date, %repeat, "Processing next date request");

    match resolve_next_date(&now, &date, &repeat) {
        Ok(next) => res.render(Text::Plain(next)),
        Err(err) => render_error(res, &err),
    }
}

fn resolve_next_date(now: &str, date: &str, repeat: &str) -> AppResult<String> {
    // `now` is checked before anything else, including the rule.
    parse_date(now)?;

    Ok(next_occurrence(now, date, repeat)?)
}

fn render_error(res: &mut Response, err: &AppError) {
    if err.kind().is_some() {
        tracing::debug!(error = %err, "Rejected next date request");
        res.status_code(StatusCode::BAD_REQUEST);
    } else {
        tracing::error!(error = %err, "Next date computation failed");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }
    res.render(Json(ErrorResponse {
        error: err.to_string(),
    }));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(NEXT_DATE_ROUTE_COMPONENT).get(next_date_handler)
}

#[cfg(test)]
#[path = "nextdate_tests.rs"]
mod tests;
