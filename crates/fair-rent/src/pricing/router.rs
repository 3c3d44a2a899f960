use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::market::MarketKey;
use super::repository::MarketDataRepository;
use super::service::{PricingService, PricingServiceError, QuoteRequest};

/// Router builder exposing HTTP endpoints for quoting and market data intake.
pub fn pricing_router<R>(service: Arc<PricingService<R>>) -> Router
where
    R: MarketDataRepository + 'static,
{
    Router::new()
        .route("/api/v1/pricing/quote", post(quote_handler::<R>))
        .route("/api/v1/market/snapshots", post(import_handler::<R>))
        .route(
            "/api/v1/market/snapshots/:city/:state",
            get(market_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn quote_handler<R>(
    State(service): State<Arc<PricingService<R>>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response
where
    R: MarketDataRepository + 'static,
{
    match service.quote(request) {
        Ok(quote) => (StatusCode::OK, axum::Json(quote)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn import_handler<R>(
    State(service): State<Arc<PricingService<R>>>,
    body: String,
) -> Response
where
    R: MarketDataRepository + 'static,
{
    match service.import_market_csv(Cursor::new(body.into_bytes())) {
        Ok(summary) => (StatusCode::ACCEPTED, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn market_handler<R>(
    State(service): State<Arc<PricingService<R>>>,
    Path((city, state)): Path<(String, String)>,
) -> Response
where
    R: MarketDataRepository + 'static,
{
    let key = MarketKey::from_parts(&city, &state);
    match service.market_for(&key) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: PricingServiceError) -> Response {
    match error {
        PricingServiceError::UnknownMarket { city, state } => {
            let payload = json!({
                "error": format!("no market snapshot for {city}, {state}"),
                "city": city,
                "state": state,
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        PricingServiceError::Input(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        PricingServiceError::Import(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        PricingServiceError::Repository(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
