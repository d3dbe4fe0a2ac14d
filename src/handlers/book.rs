use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;
use crate::services::store::StoreResponse;
use crate::state::AppState;

// POST /api/book
//
// The body is taken raw so that a payload that does not parse is reported in
// the same `{message, error}` shape as every other internal failure. Anything
// that parses as JSON is forwarded as received: no field is checked, renamed
// or dropped.
pub async fn book(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    match forward(&state, &body).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(error = %e, "error in booking route");
            e.into_response()
        }
    }
}

async fn forward(state: &AppState, body: &[u8]) -> Result<Response, AppError> {
    let payload: serde_json::Value = serde_json::from_slice(body)?;

    let records = payload["records"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default();
    for record in records {
        let fields = &record["fields"];
        tracing::info!(
            service = %fields["service"],
            date = %fields["date"],
            time = %fields["time"],
            "booking received"
        );
    }

    match state.store.create_records(&payload).await? {
        StoreResponse::Rejected { status, detail } => {
            tracing::warn!(status, detail = %detail, "Grist rejected booking");
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            Ok((
                status,
                Json(json!({
                    "message": "Failed to submit to Grist",
                    "gristError": detail,
                })),
            )
                .into_response())
        }
        StoreResponse::Accepted(data) => {
            tracing::info!(result = %data, "booking stored");
            Ok((
                StatusCode::OK,
                Json(json!({
                    "message": "Booking successfully submitted!",
                    "data": data,
                })),
            )
                .into_response())
        }
    }
}
