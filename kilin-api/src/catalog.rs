use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use kilin_catalog::{Catalog, PriceQuote};

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct PriceParams {
    pub vehicle: String,
    pub service: String,
    /// Comma-separated add-on ids.
    #[serde(default)]
    pub addons: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/catalog", get(catalog))
        .route("/v1/catalog/price", get(price))
}

async fn catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.catalog)
}

async fn price(
    State(state): State<AppState>,
    Query(params): Query<PriceParams>,
) -> Result<Json<PriceQuote>, AppError> {
    let add_ons: Vec<&str> = params
        .addons
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    let quote = state.catalog.quote(&params.vehicle, &params.service, add_ons.as_slice())?;
    Ok(Json(quote))
}
