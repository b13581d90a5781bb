use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{frontend, handlers, state::AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(frontend::index))
        .route("/main.js", get(frontend::script))
        .route("/health", get(handlers::healthcheck))
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/:id",
            put(handlers::replace_todo).delete(handlers::delete_todo),
        )
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
