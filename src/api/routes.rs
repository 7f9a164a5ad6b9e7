use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use crate::domain::{PriceQuery, PriceResponse};
use crate::error::FetchError;
use crate::fetcher::PageSource;
use crate::services::PriceService;

/// JSON error envelope: validation failures render as `{"error": ...}`,
/// fetch failures add `message` and `futbin_id`.
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    fn validation(err: &FetchError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": err.to_string() }),
        }
    }

    fn fetch_failed(err: &FetchError, futbin_id: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({
                "error": "Failed to fetch price data",
                "message": err.to_string(),
                "futbin_id": futbin_id,
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct PriceParams {
    pub futbin_id: Option<String>,
    pub platform: Option<String>,
}

/// GET|POST /price?futbin_id=..&platform=..
///
/// Looks up a card on FUTBIN and returns its prices. Partial extraction is
/// still a success; only a missing id or a failed fetch is an error.
pub async fn fetch_price<S: PageSource>(
    State(service): State<Arc<PriceService<S>>>,
    Query(params): Query<PriceParams>,
) -> Result<Json<PriceResponse>, ApiError> {
    let query = PriceQuery::from_params(params.futbin_id, params.platform)
        .map_err(|err| ApiError::validation(&err))?;

    match service.fetch_price(&query).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!("Failed to fetch price data for {}: {}", query.futbin_id, err);
            Err(ApiError::fetch_failed(&err, &query.futbin_id))
        }
    }
}

/// OPTIONS /price. The CORS headers are attached by the router layer.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
