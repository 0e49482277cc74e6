use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use summarizer_app::{router, AppContext, FETCH_FAILED_MESSAGE};
use summarizer_core::{AppState, CompanyRecord};
use summarizer_engine::{CompanySource, FailureKind, FetchError, SheetSource};
use tokio_util::sync::CancellationToken;
use tower::ServiceExt;

struct FixedRows {
    result: Result<Vec<Vec<String>>, FetchError>,
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl SheetSource for FixedRows {
    async fn fetch_rows(&self) -> Result<Vec<Vec<String>>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

struct NoCompanies;

#[async_trait::async_trait]
impl CompanySource for NoCompanies {
    async fn fetch_companies(&self) -> Result<Vec<CompanyRecord>, FetchError> {
        Ok(Vec::new())
    }
}

fn rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

async fn get_companies(result: Result<Vec<Vec<String>>, FetchError>) -> (StatusCode, Value, usize) {
    engine_logging::initialize_for_tests();
    let sheets = Arc::new(FixedRows {
        result,
        calls: AtomicUsize::new(0),
    });
    let ctx = AppContext::new(
        sheets.clone(),
        Arc::new(NoCompanies),
        AppState::sample(std::time::Duration::from_millis(1)),
        CancellationToken::new(),
    )
    .expect("context");

    let response = router(ctx)
        .oneshot(
            Request::builder()
                .uri("/api/companies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&body).unwrap();
    (status, value, sheets.calls.load(Ordering::SeqCst))
}

#[tokio::test]
async fn rows_map_to_completed_records_in_order() {
    let (status, body, calls) = get_companies(Ok(rows(&[
        &["Apple Inc.", "https://www.apple.com", "Fortune 500", "Makes phones."],
        &["Tesla Inc.", "https://www.tesla.com", "NASDAQ"],
        &["Zoom"],
    ])))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(calls, 1);
    assert_eq!(
        body,
        json!([
            {"name": "Apple Inc.", "website": "https://www.apple.com", "source": "Fortune 500",
             "summary": "Makes phones.", "status": "completed"},
            {"name": "Tesla Inc.", "website": "https://www.tesla.com", "source": "NASDAQ",
             "summary": "", "status": "completed"},
            {"name": "Zoom", "website": "", "source": "", "summary": "", "status": "completed"}
        ])
    );
}

#[tokio::test]
async fn zero_rows_is_empty_list() {
    let (status, body, _) = get_companies(Ok(Vec::new())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn upstream_failure_is_500_with_error_body() {
    let (status, body, _) = get_companies(Err(FetchError {
        kind: FailureKind::HttpStatus(403),
        message: "403 Forbidden".to_string(),
    }))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": FETCH_FAILED_MESSAGE }));
}
