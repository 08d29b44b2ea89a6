use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/select", post(handlers::select))
        .route("/api/details", get(handlers::get_details))
        .route("/api/reload", post(handlers::reload))
        .with_state(state)
}
