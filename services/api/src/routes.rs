use crate::infra::{default_pricing_policy, AppState};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use fair_rent::pricing::market::import_snapshots;
use fair_rent::pricing::{
    pricing_router, EconomicInputs, EthicalPricingValidator, GuidanceFormatter,
    MarketDataRepository, MarketKey, PricingService, PricingSuggestions, PropertyCharacteristics,
    RentSuggestionEngine, ValidationResult,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

/// Stateless preview payload: a listing plus either inline economics or a
/// market CSV export to resolve them from.
#[derive(Debug, Deserialize)]
pub(crate) struct PricingPreviewRequest {
    pub(crate) characteristics: PropertyCharacteristics,
    #[serde(default)]
    pub(crate) proposed_rent: Option<f64>,
    #[serde(default)]
    pub(crate) economics: Option<EconomicInputs>,
    #[serde(default)]
    pub(crate) market_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PricingPreviewResponse {
    pub(crate) generated_on: NaiveDate,
    pub(crate) data_source: PreviewDataSource,
    pub(crate) economics: EconomicInputs,
    pub(crate) suggestions: PricingSuggestions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) validation: Option<ValidationResult>,
    pub(crate) guidance: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PreviewDataSource {
    Inline,
    MarketCsv,
}

pub(crate) fn with_pricing_routes<R>(service: Arc<PricingService<R>>) -> axum::Router
where
    R: MarketDataRepository + 'static,
{
    pricing_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/pricing/preview",
            axum::routing::post(pricing_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn pricing_preview_endpoint(
    Json(payload): Json<PricingPreviewRequest>,
) -> Response {
    let PricingPreviewRequest {
        characteristics,
        proposed_rent,
        economics,
        market_csv,
    } = payload;

    let (economics, data_source) = if let Some(economics) = economics {
        (economics, PreviewDataSource::Inline)
    } else if let Some(csv) = market_csv {
        let snapshots = match import_snapshots(Cursor::new(csv.into_bytes())) {
            Ok(snapshots) => snapshots,
            Err(error) => {
                let body = Json(json!({ "error": error.to_string() }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
        };

        let key = MarketKey::new(&characteristics.location);
        let matched = snapshots
            .into_iter()
            .find(|snapshot| MarketKey::new(&snapshot.location) == key);
        match matched {
            Some(snapshot) => (snapshot.economics, PreviewDataSource::MarketCsv),
            None => {
                let body = Json(json!({
                    "error": format!(
                        "market csv has no row for {}, {}",
                        characteristics.location.city, characteristics.location.state
                    ),
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
        }
    } else {
        let body = Json(json!({
            "error": "provide either economics or a market_csv to resolve them from",
        }));
        return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
    };

    let policy = default_pricing_policy();
    let engine = RentSuggestionEngine::new(policy.clone());
    let suggestions = match engine.suggest(&characteristics, &economics) {
        Ok(suggestions) => suggestions,
        Err(error) => {
            let body = Json(json!({ "error": error.to_string() }));
            return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
        }
    };

    let validation = match proposed_rent {
        Some(rent) => {
            let validator = EthicalPricingValidator::new(policy.clone());
            match validator.validate(rent, &characteristics, &economics) {
                Ok(validation) => Some(validation),
                Err(error) => {
                    let body = Json(json!({ "error": error.to_string() }));
                    return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
                }
            }
        }
        None => None,
    };

    let guidance = GuidanceFormatter::new(policy).guidance(&characteristics, Some(&economics));

    let response = PricingPreviewResponse {
        generated_on: Local::now().date_naive(),
        data_source,
        economics,
        suggestions,
        validation,
        guidance,
    };
    (StatusCode::OK, Json(response)).into_response()
}
