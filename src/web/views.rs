use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::{
    models::{Post, PostForm},
    Result,
};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// The add form. After a submission it carries either the created post or
/// the validation messages together with the submitted values.
#[derive(Template, Default)]
#[template(path = "add_post.html")]
pub struct AddPostTemplate {
    pub form: PostForm,
    pub errors: Vec<String>,
    pub created: Option<Post>,
}

#[derive(Template)]
#[template(path = "posts.html")]
pub struct PostsTemplate {
    pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "edit_post.html")]
pub struct EditPostTemplate {
    pub post: Post,
}

pub fn render<T: Template>(template: T) -> Result<Response> {
    Ok(Html(template.render()?).into_response())
}
