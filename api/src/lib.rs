pub mod api_error;
pub mod handlers;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

pub use state::AppState;

pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(handlers::index))
        .route("/upload/", post(handlers::upload))
        .route("/query/", post(handlers::query))
        .nest_service("/static", static_files)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
