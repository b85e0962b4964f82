//! SQLite trivia repository
//!
//! Also serves as the isolated per-test store via `sqlite::memory:`.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{DbError, TriviaStore};
use crate::db::pool::create_sqlite_pool;
use crate::models::{NewTrivia, TriviaRecord};

// created_at is stored as RFC 3339 text with millisecond precision
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS trivia (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category TEXT,
    difficulty TEXT,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)
"#;

/// Trivia repository backed by SQLite
#[derive(Clone)]
pub struct SqliteTriviaRepo {
    pool: SqlitePool,
}

impl SqliteTriviaRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a fresh in-memory database with the schema applied (for testing)
    pub async fn in_memory() -> Result<Self, DbError> {
        let pool = create_sqlite_pool("sqlite::memory:", 1).await?;
        let repo = Self::new(pool);
        repo.init_schema().await?;
        Ok(repo)
    }

    /// Create the `trivia` table if it does not exist.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        tracing::debug!("ensuring trivia table (sqlite)");
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Close the underlying pool. Later operations fail with a storage error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TriviaStore for SqliteTriviaRepo {
    async fn insert(&self, new: &NewTrivia) -> Result<TriviaRecord, DbError> {
        let mut tx = self.pool.begin().await?;

        let record: TriviaRecord = sqlx::query_as(
            r#"
            INSERT INTO trivia (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            RETURNING id, question, answer, category, difficulty, created_at
            "#,
        )
        .bind(new.question())
        .bind(new.answer())
        .bind(new.category())
        .bind(new.difficulty())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    async fn get(&self, id: i64) -> Result<Option<TriviaRecord>, DbError> {
        let record: Option<TriviaRecord> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty, created_at
            FROM trivia
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<TriviaRecord>, DbError> {
        let records: Vec<TriviaRecord> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty, created_at
            FROM trivia
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_get() {
        let repo = SqliteTriviaRepo::in_memory().await.unwrap();
        let new = NewTrivia::new(
            "What is the capital of France?",
            "Paris",
            Some("Geography".into()),
            Some("easy".into()),
        )
        .unwrap();

        let record = repo.insert(&new).await.unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.question, "What is the capital of France?");
        assert_eq!(record.answer, "Paris");
        assert_eq!(record.category.as_deref(), Some("Geography"));
        assert_eq!(record.difficulty.as_deref(), Some("easy"));

        let fetched = repo.get(record.id).await.unwrap().unwrap();
        assert_eq!(fetched, record);
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let repo = SqliteTriviaRepo::in_memory().await.unwrap();
        assert!(repo.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_in_insertion_order() {
        let repo = SqliteTriviaRepo::in_memory().await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());

        for (q, a) in [("Q1", "A1"), ("Q2", "A2"), ("Q3", "A3")] {
            repo.insert(&NewTrivia::new(q, a, None, None).unwrap())
                .await
                .unwrap();
        }

        let records = repo.list().await.unwrap();
        let questions: Vec<&str> = records.iter().map(|t| t.question.as_str()).collect();
        assert_eq!(questions, ["Q1", "Q2", "Q3"]);
        assert!(records.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn created_at_is_set_by_store() {
        let repo = SqliteTriviaRepo::in_memory().await.unwrap();
        let before = chrono::Utc::now() - chrono::Duration::seconds(5);

        let record = repo
            .insert(&NewTrivia::new("q", "a", None, None).unwrap())
            .await
            .unwrap();

        assert!(record.created_at >= before);
        assert!(record.created_at <= chrono::Utc::now() + chrono::Duration::seconds(5));
    }

    #[tokio::test]
    async fn closed_pool_is_storage_failure() {
        let repo = SqliteTriviaRepo::in_memory().await.unwrap();
        repo.close().await;

        let err = repo
            .insert(&NewTrivia::new("q", "a", None, None).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
    }
}
