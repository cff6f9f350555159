mod stock;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use stockproxy_lookup::StockLookup;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::{options_no_content, request_id};

#[derive(Clone)]
pub struct AppState {
    pub lookup: StockLookup,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    ok: bool,
    upstream_configured: bool,
}

/// Builds the CORS layer for `origin`; `*` allows any origin.
///
/// # Errors
///
/// Returns an error if `origin` is not a valid header value.
fn build_cors(origin: &str) -> anyhow::Result<CorsLayer> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(HeaderValue::from_str(origin)?)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
            HeaderName::from_static("x-request-id"),
        ])
        .vary([header::ORIGIN]))
}

/// Builds the router with CORS, request IDs and HTTP tracing applied.
///
/// # Errors
///
/// Returns an error if `cors_origin` is not a valid header value.
pub fn build_app(state: AppState, cors_origin: &str) -> anyhow::Result<Router> {
    // OPTIONS never reaches the router: the CORS layer answers it and
    // `options_no_content` turns that answer into a 204.
    let stock_route = get(stock::get_stock).fallback(stock::method_not_allowed);

    Ok(Router::new()
        .route("/api/stok", stock_route.clone())
        .route("/api/stock", stock_route)
        .route("/api/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id))
                .layer(axum::middleware::from_fn(options_no_content))
                .layer(build_cors(cors_origin)?),
        )
        .with_state(state))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthData {
        ok: true,
        upstream_configured: state.lookup.is_configured(),
    })
}
