//! HTTP handlers exposing the hierarchy queries.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use psgc_address::{AddressStore, HierarchyResolver};

/// Application state shared across handlers
pub struct AppState {
    pub store: AddressStore,
}

impl AppState {
    fn resolver(&self) -> HierarchyResolver<'_> {
        HierarchyResolver::new(&self.store)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/regions", get(regions_handler))
        .route("/v1/provinces", get(provinces_handler))
        .route("/v1/cities", get(cities_handler))
        .route("/v1/barangays", get(barangays_handler))
        .route("/v1/region", get(region_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    records: usize,
}

/// Health check endpoint
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.store.len(),
    })
}

/// All regions
async fn regions_handler(State(state): State<Arc<AppState>>) -> Response {
    Json(state.resolver().regions()).into_response()
}

#[derive(Deserialize)]
struct ProvincesParams {
    region: Option<String>,
}

/// Provinces of a region, or the "-NO PROVINCE-" marker
async fn provinces_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProvincesParams>,
) -> Response {
    Json(state.resolver().provinces_by_region(params.region.as_deref())).into_response()
}

#[derive(Deserialize)]
struct CitiesParams {
    /// Province code or "-NO PROVINCE-"
    #[serde(default)]
    province: String,
    region: Option<String>,
}

/// Cities and municipalities located in a province
async fn cities_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CitiesParams>,
) -> Response {
    let found = state
        .resolver()
        .cities_and_muns_by_province(&params.province, params.region.as_deref());
    Json(found).into_response()
}

#[derive(Deserialize)]
struct BarangaysParams {
    #[serde(default)]
    city_mun: String,
}

/// Barangays of a city or municipality
async fn barangays_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BarangaysParams>,
) -> Response {
    Json(state.resolver().barangays_by_city_or_mun(&params.city_mun)).into_response()
}

#[derive(Deserialize)]
struct RegionParams {
    province: String,
}

/// Region of a province
async fn region_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegionParams>,
) -> Response {
    match state.resolver().region_by_province(&params.province) {
        Some(region) => Json(region).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("No region found for province {}", params.province),
        )
            .into_response(),
    }
}
