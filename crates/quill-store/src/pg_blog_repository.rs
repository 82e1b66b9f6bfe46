//! `PostgreSQL` implementation of the `BlogRepository` trait.

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{FromRow, PgPool, Postgres};
use tracing::instrument;

use quill_core::blog::{Blog, BlogChanges, BlogFilter, NewBlog};
use quill_core::error::DomainError;
use quill_core::repository::BlogRepository;

/// Row shape of the `blogs` table.
#[derive(Debug, FromRow)]
struct BlogRow {
    id: String,
    title: String,
    content: String,
    author_id: String,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn infrastructure(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "blog store operation failed");
    DomainError::Infrastructure(err.to_string())
}

/// PostgreSQL-backed blog repository.
///
/// Holds the shared pool. Each operation checks out one connection for its
/// single statement; the connection goes back to the pool when the guard
/// drops at the end of the call.
#[derive(Debug, Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    /// Creates a new `PgBlogRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<PoolConnection<Postgres>, DomainError> {
        self.pool.acquire().await.map_err(infrastructure)
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_unique(&self, id: &str) -> Result<Option<Blog>, DomainError> {
        let mut conn = self.connection().await?;
        let row = sqlx::query_as::<_, BlogRow>(
            "SELECT id, title, content, author_id FROM blogs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(infrastructure)?;

        Ok(row.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn find_many(&self, filter: &BlogFilter) -> Result<Vec<Blog>, DomainError> {
        let mut conn = self.connection().await?;
        let rows = sqlx::query_as::<_, BlogRow>(
            r"
            SELECT id, title, content, author_id
            FROM blogs
            WHERE ($1::TEXT IS NULL OR id = $1)
            ORDER BY id
            ",
        )
        .bind(filter.id.as_deref())
        .fetch_all(&mut *conn)
        .await
        .map_err(infrastructure)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Blog>, DomainError> {
        let mut conn = self.connection().await?;
        let rows = sqlx::query_as::<_, BlogRow>(
            "SELECT id, title, content, author_id FROM blogs ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(infrastructure)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    #[instrument(skip(self, blog), fields(author_id = %blog.author_id))]
    async fn create(&self, blog: NewBlog) -> Result<Blog, DomainError> {
        let mut conn = self.connection().await?;
        let row = sqlx::query_as::<_, BlogRow>(
            r"
            INSERT INTO blogs (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id
            ",
        )
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(&blog.author_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(infrastructure)?;

        Ok(row.into())
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: &str, changes: BlogChanges) -> Result<Option<Blog>, DomainError> {
        let mut conn = self.connection().await?;
        let row = sqlx::query_as::<_, BlogRow>(
            r"
            UPDATE blogs
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content, author_id
            ",
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.content)
        .fetch_optional(&mut *conn)
        .await
        .map_err(infrastructure)?;

        Ok(row.map(Blog::from))
    }

    async fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(infrastructure)?;
        Ok(())
    }
}
