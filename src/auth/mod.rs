use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod session;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::home_routes())
        .merge(handlers::auth_routes())
}
