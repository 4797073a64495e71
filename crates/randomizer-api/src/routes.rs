//! - `GET /randomizer/address?country=XXX` — random address, optionally for one country
//! - `GET /health/liveness` — liveness probe

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use randomizer_core::{Address, NO_COUNTRY};
use randomizer_generate::WordListStore;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/randomizer/address", get(random_address))
        .route("/health/liveness", get(liveness))
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressQuery {
    pub country: Option<String>,
}

async fn random_address(
    State(state): State<AppState>,
    Query(query): Query<AddressQuery>,
) -> Result<Json<Address>, AppError> {
    let country = requested_country(state.factory.store(), query.country.as_deref())?;
    let address = state
        .factory
        .create_address(country.as_deref(), &mut rand::rng())?;
    Ok(Json(address))
}

async fn liveness() -> &'static str {
    "ok"
}

/// Normalises the `country` parameter.
///
/// Absent, blank and `NO_VALUE` mean "any country" and yield `None`. Anything
/// else must be an implemented country code (case-insensitive).
pub fn requested_country(
    store: &WordListStore,
    country: Option<&str>,
) -> Result<Option<String>, AppError> {
    let Some(country) = country.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };
    if country.eq_ignore_ascii_case(NO_COUNTRY) {
        return Ok(None);
    }
    if !store.is_implemented(country) {
        tracing::warn!(
            event = "country_rejected",
            country = %country,
            implemented = ?store.implemented_countries(),
            "country is not supported"
        );
        return Err(AppError::NotFound("Country is not supported".to_string()));
    }
    Ok(Some(country.to_ascii_uppercase()))
}
