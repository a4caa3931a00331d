use cadence_app::app::api::HEALTHCHECK_ROUTE;
use salvo::http::StatusCode;

use super::helpers::get;

#[test_log::test(tokio::test)]
async fn healthcheck_answers_ok() {
    let res = get(HEALTHCHECK_ROUTE).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "OK");
}

#[test_log::test(tokio::test)]
async fn unknown_route_is_not_found() {
    let res = get("/api/tasks").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
