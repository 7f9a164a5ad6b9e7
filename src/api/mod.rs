use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::middleware::map_response;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::fetcher::PageSource;
use crate::services::PriceService;

pub mod routes;

/// The browser-facing surface is open to any origin. Every response carries
/// the same three CORS headers, preflight or not.
async fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    response
}

pub fn router<S: PageSource>(service: PriceService<S>) -> Router {
    Router::new()
        .route(
            "/price",
            get(routes::fetch_price::<S>)
                .post(routes::fetch_price::<S>)
                .options(routes::preflight),
        )
        .route("/health", get(routes::health))
        .layer(map_response(with_cors))
        .with_state(Arc::new(service))
}
