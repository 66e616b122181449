//! Axum route handlers for the portfolio read API.
//!
//! Each handler is a pure projection: read from the content store, serialize
//! as JSON.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::portfolio::{Assignment, FunAnswer, Reflection, Skill};
use crate::state::AppState;

/// The fixed 404 body text of the original API contract.
const NOT_FOUND_MESSAGE: &str = "Niet gevonden";

/// GET /api/assignments
pub async fn handle_list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = state.store.list_assignments().await?;
    Ok(Json(assignments))
}

/// GET /api/assignments/:id
pub async fn handle_get_assignment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Assignment>, AppError> {
    let assignment = state
        .store
        .get_assignment(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;
    Ok(Json(assignment))
}

/// GET /api/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let skills = state.store.list_skills().await?;
    Ok(Json(skills))
}

/// GET /api/reflections
pub async fn handle_list_reflections(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reflection>>, AppError> {
    let reflections = state.store.list_reflections().await?;
    Ok(Json(reflections))
}

/// GET /api/vlaai
pub async fn handle_random_fun_answer(
    State(state): State<AppState>,
) -> Result<Json<FunAnswer>, AppError> {
    let answer = state
        .store
        .random_fun_answer()
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;
    Ok(Json(answer))
}
