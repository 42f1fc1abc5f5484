use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use crate::{
    models::{parse_id, PostForm},
    Error, Result,
};

use super::{
    views::{render, AddPostTemplate, EditPostTemplate, HomeTemplate, PostsTemplate},
    AppState,
};

const POSTS_PATH: &str = "/posts";

pub async fn home() -> Result<Response> {
    render(HomeTemplate {})
}

pub async fn add_post_form() -> Result<Response> {
    render(AddPostTemplate::default())
}

pub async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Response> {
    let posts = match state.store.list_all().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("Failed to list posts: {}", e);
            Vec::new()
        }
    };

    render(PostsTemplate { posts })
}

pub async fn submit_post(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<Response> {
    let template = match state.store.create(form.clone()).await {
        Ok(post) => AddPostTemplate {
            created: Some(post),
            ..Default::default()
        },
        Err(Error::Validation(errors)) => {
            tracing::debug!("Rejected post: {:?}", errors);
            AddPostTemplate {
                form,
                errors,
                created: None,
            }
        }
        Err(e) => return Err(e),
    };

    render(template)
}

pub async fn submit_update_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<PostForm>,
) -> Result<Redirect> {
    let id = parse_id(&id)?;
    state.store.update(id, form).await?;

    Ok(Redirect::to(POSTS_PATH))
}

pub async fn delete_post(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Redirect {
    let result = match parse_id(&id) {
        Ok(id) => state.store.delete_by_id(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(true) => tracing::debug!(post_id = %id, "Deleted post"),
        Ok(false) | Err(Error::NotFound) => tracing::debug!(post_id = %id, "No post to delete"),
        Err(e) => tracing::error!(post_id = %id, "Failed to delete post: {}", e),
    }

    Redirect::to(POSTS_PATH)
}

pub async fn edit_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    let post = state.store.get_by_id(parse_id(&id)?).await?;

    render(EditPostTemplate { post })
}

pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

pub async fn not_found() -> Response {
    Error::NotFound.into_response()
}
