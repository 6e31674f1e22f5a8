use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks", post(handlers::create_task))
        .route("/tasks/:id", post(handlers::update_task))
        .route("/tasks/:id/edit", get(handlers::edit_task))
        .route("/tasks/:id/delete", post(handlers::delete_task))
        .route("/status", get(handlers::status))
        .route("/health", get(handlers::liveness))
        .with_state(state)
}
