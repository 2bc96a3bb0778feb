//! SQLite database layer for file posts
//!
//! Declared ahead of the routes: nothing under `/posts` reads or writes this
//! table yet. Access goes through `DbSession`, one per unit of work.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use postboard_core::{FilePost, NewFilePost};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Sqlite, SqlitePool};
use std::str::FromStr;
use uuid::Uuid;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_url);

        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database at: {}", database_url))?;

        tracing::info!("SQLite connection established");

        Ok(Self { pool })
    }

    /// Create every declared table that does not exist yet
    pub async fn create_tables(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id TEXT PRIMARY KEY,
                caption TEXT,
                url TEXT NOT NULL,
                file_type TEXT NOT NULL,
                file_name TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create posts table")?;

        Ok(())
    }

    /// Check out a session. The connection goes back to the pool when the
    /// session is dropped, whichever way its scope ends.
    pub async fn session(&self) -> Result<DbSession> {
        let conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire database connection")?;

        Ok(DbSession { conn })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Scoped, single-owner handle to the file-post store
pub struct DbSession {
    conn: PoolConnection<Sqlite>,
}

impl DbSession {
    pub async fn ping(&mut self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&mut *self.conn).await?;
        Ok(())
    }

    pub async fn insert_post(&mut self, new_post: NewFilePost) -> Result<FilePost> {
        let post = new_post.into_record();

        sqlx::query(
            r#"
            INSERT INTO posts (id, caption, url, file_type, file_name, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(post.id.to_string())
        .bind(&post.caption)
        .bind(&post.url)
        .bind(&post.file_type)
        .bind(&post.file_name)
        .bind(post.created_at)
        .execute(&mut *self.conn)
        .await?;

        tracing::debug!("Inserted file post {}", post.id);
        Ok(post)
    }

    pub async fn get_post(&mut self, id: Uuid) -> Result<Option<FilePost>> {
        let row: Option<FilePostRow> = sqlx::query_as(
            r#"
            SELECT id, caption, url, file_type, file_name, created_at
            FROM posts WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&mut *self.conn)
        .await?;

        row.map(FilePost::try_from).transpose()
    }

    pub async fn list_posts(&mut self) -> Result<Vec<FilePost>> {
        let rows: Vec<FilePostRow> = sqlx::query_as(
            r#"
            SELECT id, caption, url, file_type, file_name, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        rows.into_iter().map(FilePost::try_from).collect()
    }

    /// Returns whether a row was removed
    pub async fn delete_post(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct FilePostRow {
    id: String,
    caption: Option<String>,
    url: String,
    file_type: String,
    file_name: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<FilePostRow> for FilePost {
    type Error = anyhow::Error;

    fn try_from(r: FilePostRow) -> Result<Self> {
        let id = Uuid::parse_str(&r.id)
            .with_context(|| format!("Corrupt post id in database: {}", r.id))?;

        Ok(FilePost {
            id,
            caption: r.caption,
            url: r.url,
            file_type: r.file_type,
            file_name: r.file_name,
            created_at: r.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open(dir: &TempDir) -> Database {
        let url = format!("sqlite://{}", dir.path().join("posts.db").display());
        let db = Database::connect(&url, 2).await.unwrap();
        db.create_tables().await.unwrap();
        db
    }

    fn sample() -> NewFilePost {
        NewFilePost {
            caption: Some("sunset".to_string()),
            url: "https://ik.imagekit.io/demo/sunset.jpg".to_string(),
            file_type: "image".to_string(),
            file_name: "sunset.jpg".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let db = open(&dir).await;

        db.create_tables().await.unwrap();
        db.create_tables().await.unwrap();
    }

    #[tokio::test]
    async fn test_insert_get_delete() {
        let dir = TempDir::new().unwrap();
        let db = open(&dir).await;
        let mut session = db.session().await.unwrap();

        let inserted = session.insert_post(sample()).await.unwrap();
        let fetched = session.get_post(inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, inserted.id);
        assert_eq!(fetched.caption.as_deref(), Some("sunset"));
        assert_eq!(fetched.file_name, "sunset.jpg");
        assert_eq!(fetched.created_at, inserted.created_at);

        assert!(session.delete_post(inserted.id).await.unwrap());
        assert!(!session.delete_post(inserted.id).await.unwrap());
        assert!(session.get_post(inserted.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_each_insert_gets_a_fresh_id() {
        let dir = TempDir::new().unwrap();
        let db = open(&dir).await;
        let mut session = db.session().await.unwrap();

        let a = session.insert_post(sample()).await.unwrap();
        let b = session.insert_post(sample()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(session.list_posts().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_session_released_on_drop() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("one.db").display());
        let db = Database::connect(&url, 1).await.unwrap();

        // With a single-connection pool a leaked session would block this loop
        for _ in 0..3 {
            let mut session = db.session().await.unwrap();
            session.ping().await.unwrap();
        }

        let failing: Result<()> = async {
            let mut session = db.session().await?;
            session.ping().await?;
            anyhow::bail!("unit of work failed")
        }
        .await;
        assert!(failing.is_err());

        db.session().await.unwrap().ping().await.unwrap();
        db.close().await;
    }
}
