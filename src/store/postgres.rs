use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{new_post, PostStore};
use crate::{
    models::{Post, PostForm},
    Error, Result,
};

/// Posts stored in the `posts` table.
#[derive(Clone, Debug)]
pub struct PgPostStore {
    db: PgPool,
}

impl PgPostStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Opens a pool and brings the schema up to date.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let db = crate::db::create_pool(database_url, max_connections).await?;
        crate::db::migrate(&db).await?;

        Ok(Self::new(db))
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn create(&self, candidate: PostForm) -> Result<Post> {
        let post = new_post(candidate)?;

        sqlx::query("INSERT INTO posts (id, img, title, body) VALUES ($1, $2, $3, $4)")
            .bind(post.id)
            .bind(&post.img)
            .bind(&post.title)
            .bind(&post.body)
            .execute(&self.db)
            .await?;
        tracing::debug!(post_id = %post.id, "Created post");

        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>("SELECT id, img, title, body FROM posts")
            .fetch_all(&self.db)
            .await?;

        Ok(posts)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Post> {
        sqlx::query_as::<_, Post>("SELECT id, img, title, body FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?
            .ok_or(Error::NotFound)
    }

    async fn update(&self, id: Uuid, fields: PostForm) -> Result<Post> {
        let mut post = self.get_by_id(id).await?;
        post.overwrite(fields);

        let result = sqlx::query("UPDATE posts SET img = $1, title = $2, body = $3 WHERE id = $4")
            .bind(&post.img)
            .bind(&post.title)
            .bind(&post.body)
            .bind(post.id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }
        tracing::debug!(post_id = %post.id, "Updated post");

        Ok(post)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn close(&self) {
        self.db.close().await;
    }
}
