pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;

use crate::infra::db::Db;

/// Shared handler state. The store handle is opened once at startup and
/// cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}
