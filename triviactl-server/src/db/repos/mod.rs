//! Repository implementations for database access
//!
//! Each backend implements [`TriviaStore`] with the same contract:
//! - insert: single INSERT ... RETURNING inside a transaction
//! - get: absence is `Ok(None)`, not an error
//! - list: every row, `ORDER BY id ASC`

pub mod postgres;
pub mod sqlite;

use async_trait::async_trait;

use crate::models::{NewTrivia, TriviaRecord};

pub use postgres::PgTriviaRepo;
pub use sqlite::SqliteTriviaRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unsupported database URL '{0}' (expected postgres:// or sqlite:)")]
    UnsupportedUrl(String),
}

/// Persistence contract for trivia records
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// Persist a candidate. The store assigns `id` and `created_at`.
    async fn insert(&self, new: &NewTrivia) -> Result<TriviaRecord, DbError>;

    /// Fetch a record by id.
    async fn get(&self, id: i64) -> Result<Option<TriviaRecord>, DbError>;

    /// Fetch all records in ascending id order.
    async fn list(&self) -> Result<Vec<TriviaRecord>, DbError>;
}
