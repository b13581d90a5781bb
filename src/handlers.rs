use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::Uri,
};

use crate::{
    error::{AppError, AppResult},
    models::{DeletedTodo, HealthStatus, Todo},
    state::AppState,
};

pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        todos: state.repo.count().await,
    })
}

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.repo.list().await)
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<Todo>, JsonRejection>,
) -> AppResult<Json<Todo>> {
    let Json(todo) = payload?;
    Ok(Json(state.repo.create(todo).await))
}

/// Answers with the requested id whether or not anything was removed.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeletedTodo> {
    state.repo.delete(&id).await;
    Json(DeletedTodo { id })
}

/// Echoes the replacement body whether or not any record matched.
pub async fn replace_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Todo>, JsonRejection>,
) -> AppResult<Json<Todo>> {
    let Json(todo) = payload?;
    state.repo.replace(&id, todo.clone()).await;
    Ok(Json(todo))
}

pub async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(format!("no route for {}", uri.path()))
}
