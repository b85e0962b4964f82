//! PostgreSQL trivia repository

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, TriviaStore};
use crate::models::{NewTrivia, TriviaRecord};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS trivia (
    id BIGSERIAL PRIMARY KEY,
    question VARCHAR(500) NOT NULL,
    answer VARCHAR(500) NOT NULL,
    category TEXT,
    difficulty TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Trivia repository backed by PostgreSQL
#[derive(Clone)]
pub struct PgTriviaRepo {
    pool: PgPool,
}

impl PgTriviaRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `trivia` table if it does not exist.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        tracing::debug!("ensuring trivia table (postgres)");
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TriviaStore for PgTriviaRepo {
    async fn insert(&self, new: &NewTrivia) -> Result<TriviaRecord, DbError> {
        let mut tx = self.pool.begin().await?;

        let record: TriviaRecord = sqlx::query_as(
            r#"
            INSERT INTO trivia (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
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
            WHERE id = $1
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
