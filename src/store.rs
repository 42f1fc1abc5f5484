//! Persistence for posts.
//!
//! Every backend builds new posts with [`new_post`] and applies edits with
//! [`Post::overwrite`], so validation and trimming behave the same whatever
//! the storage. There is no way to write a post that bypasses them.

mod memory;
mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    models::{Post, PostForm},
    validation, Error, Result,
};

pub use memory::MemoryPostStore;
pub use postgres::PgPostStore;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Validates `candidate` and stores it under a fresh id. Nothing is
    /// written when any rule fails.
    async fn create(&self, candidate: PostForm) -> Result<Post>;

    /// Every stored post, in the backend's own order.
    async fn list_all(&self) -> Result<Vec<Post>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Post>;

    /// Overwrites the fields of an existing post without re-validating them.
    async fn update(&self, id: Uuid, fields: PostForm) -> Result<Post>;

    /// Returns whether a post was removed.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool>;

    /// Releases the backend's resources. The store must not be used after.
    async fn close(&self);
}

/// Turns a candidate that passes validation into a post with a fresh id.
fn new_post(candidate: PostForm) -> Result<Post> {
    validation::validate(&candidate).map_err(Error::Validation)?;

    Ok(Post::from_form(Uuid::new_v4(), candidate))
}
