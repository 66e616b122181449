pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::portfolio::handlers::{
    handle_get_assignment, handle_list_assignments, handle_list_reflections, handle_list_skills,
    handle_random_fun_answer,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/assignments", get(handle_list_assignments))
        .route("/api/assignments/:id", get(handle_get_assignment))
        .route("/api/skills", get(handle_list_skills))
        .route("/api/reflections", get(handle_list_reflections))
        .route("/api/vlaai", get(handle_random_fun_answer))
        .route("/api/chat", post(handle_chat))
        .with_state(state)
}
