use cadence_app::app::api::{ErrorResponse, NEXT_DATE_ROUTE};
use salvo::http::StatusCode;

use super::helpers::{TestResponse, get};

async fn next_date(now: &str, date: &str, repeat: &str) -> TestResponse {
    let repeat = repeat.replace(' ', "%20");
    get(&format!(
        "{NEXT_DATE_ROUTE}?now={now}&date={date}&repeat={repeat}"
    ))
    .await
}

fn error_message(res: &TestResponse) -> String {
    serde_json::from_str::<ErrorResponse>(&res.body)
        .unwrap_or_else(|err| panic!("Expected JSON error body, got {:?}: {err}", res.body))
        .error
}

/// ## Summary
/// The documented examples, served over HTTP.
#[test_log::test(tokio::test)]
async fn nextdate_serves_documented_examples() {
    for (now, date, repeat, expected) in [
        ("20240229", "20240229", "y", "20250301"),
        ("20230301", "20230301", "y", "20240301"),
        ("20240101", "20240101", "w 1,7", "20240107"),
        ("20240201", "20240201", "m -1", "20240229"),
        ("20230201", "20230201", "m -1", "20230228"),
        ("20240131", "20240131", "m 31 1,2", "20250131"),
        ("20240126", "20240126", "d 1", "20240127"),
    ] {
        let res = next_date(now, date, repeat).await;

        assert_eq!(res.status, StatusCode::OK, "{repeat}: {}", res.body);
        assert_eq!(res.body, expected, "{repeat} from {date} at {now}");
    }
}

#[test_log::test(tokio::test)]
async fn nextdate_rejects_user_errors() {
    for (now, date, repeat, message) in [
        ("20240126", "20240126", "", "the repetition rule is empty"),
        ("20240126", "2024012", "d 1", "invalid date format"),
        ("20240126", "20240126", "d 0", "invalid day interval"),
        ("20240126", "20240126", "w 8", "invalid day of week"),
        ("20240126", "20240126", "m 31 2,4", "invalid day of month"),
        ("20240126", "20240126", "m 1 13", "invalid month"),
        ("20240126", "20240126", "x 1", "unsupported repetition rule"),
    ] {
        let res = next_date(now, date, repeat).await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{repeat:?}");
        assert!(
            error_message(&res).starts_with(message),
            "{repeat:?}: {}",
            res.body
        );
    }
}

#[test_log::test(tokio::test)]
async fn nextdate_missing_now_is_rejected() {
    let res = get(&format!("{NEXT_DATE_ROUTE}?date=30000101&repeat=y")).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(error_message(&res).starts_with("invalid date format"), "{}", res.body);
}

#[test_log::test(tokio::test)]
async fn nextdate_is_repeatable() {
    let first = next_date("20240201", "20231215", "m -1,15 3,6,9").await;
    let second = next_date("20240201", "20231215", "m -1,15 3,6,9").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, "20240315");
    assert_eq!(first.body, second.body);
}
