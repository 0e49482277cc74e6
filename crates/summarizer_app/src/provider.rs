use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use engine_logging::{engine_error, engine_info};
use serde_json::json;
use summarizer_engine::records_from_rows;

use crate::app::AppContext;

/// Body text of every failed read, whatever the upstream cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

/// `GET /api/companies`: one read of the sheet range, mapped to records.
pub async fn list_companies(State(ctx): State<AppContext>) -> Response {
    match ctx.sheets.fetch_rows().await {
        Ok(rows) => {
            let companies = records_from_rows(&rows);
            engine_info!("Serving {} companies", companies.len());
            Json(companies).into_response()
        }
        Err(err) => {
            engine_error!("Sheets error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": FETCH_FAILED_MESSAGE })),
            )
                .into_response()
        }
    }
}
