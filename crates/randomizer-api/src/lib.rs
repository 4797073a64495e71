//! HTTP service for the address randomizer.
//!
//! | Route                     | Handler                          |
//! |---------------------------|----------------------------------|
//! | `GET /randomizer/address` | [`routes`] random address by country |
//! | `GET /health/liveness`    | [`routes`] liveness probe        |

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
