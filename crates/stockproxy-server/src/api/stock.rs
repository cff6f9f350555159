use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use stockproxy_lookup::{AssembledResponse, StockQuery, StockResponseBody};
use tracing::Instrument;

use super::AppState;
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct StockParams {
    sku: Option<String>,
    number: Option<String>,
}

pub(super) async fn get_stock(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<StockParams>,
) -> Response {
    let query = StockQuery::new(params.sku, params.number);
    let span = tracing::info_span!("stock_lookup", request_id = %req_id.0);
    let assembled = state.lookup.lookup(&query).instrument(span).await;
    into_http_response(assembled)
}

pub(super) async fn method_not_allowed() -> Response {
    let body = StockResponseBody {
        ok: false,
        error: Some("method not allowed".to_string()),
        upstream_status: None,
        count: None,
        list: None,
        text: None,
        data: None,
    };
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, HeaderValue::from_static("GET, OPTIONS"))],
        Json(body),
    )
        .into_response()
}

pub(super) fn into_http_response(assembled: AssembledResponse) -> Response {
    let status =
        StatusCode::from_u16(assembled.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(
            header::CACHE_CONTROL,
            HeaderValue::from_static(assembled.cache_control),
        )],
        Json(assembled.body),
    )
        .into_response()
}
