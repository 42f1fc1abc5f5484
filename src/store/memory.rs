use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{new_post, PostStore};
use crate::{
    models::{Post, PostForm},
    Error, Result,
};

/// Keeps posts in process memory, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create(&self, candidate: PostForm) -> Result<Post> {
        let post = new_post(candidate)?;
        self.posts.write().await.push(post.clone());
        tracing::debug!(post_id = %post.id, "Created post");

        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>> {
        Ok(self.posts.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Post> {
        self.posts
            .read()
            .await
            .iter()
            .find(|post| post.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    async fn update(&self, id: Uuid, fields: PostForm) -> Result<Post> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(Error::NotFound)?;
        post.overwrite(fields);
        tracing::debug!(post_id = %post.id, "Updated post");

        Ok(post.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        Ok(posts.len() != before)
    }

    async fn close(&self) {
        self.posts.write().await.clear();
    }
}
