use axum::{
    handler::HandlerWithoutStateExt,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::{handlers, AppState};

pub fn create_routes(static_dir: &str) -> Router<Arc<AppState>> {
    let static_files = ServeDir::new(static_dir).not_found_service(handlers::not_found.into_service());

    Router::new()
        .route("/", get(handlers::home))
        .route("/addPost", get(handlers::add_post_form))
        .route("/posts", get(handlers::list_posts))
        .route("/submitPost", post(handlers::submit_post))
        .route("/submitUpdatePost/:id", post(handlers::submit_update_post))
        .route("/deletePost/:id", post(handlers::delete_post))
        .route("/editPost/:id", post(handlers::edit_post))
        .route("/health", get(handlers::health))
        .fallback_service(static_files)
}
