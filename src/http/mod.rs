use axum::Router;

use crate::AppState;

mod error;
mod handlers;
pub mod params;
mod routes;

pub use error::AppError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health())
        .merge(routes::feed())
        .merge(routes::posts())
        .with_state(state)
}
