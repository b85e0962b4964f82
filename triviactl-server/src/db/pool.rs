//! Database connection pool management
//!
//! Uses sqlx pools with explicit connection limits. The backend is chosen
//! from the URL scheme, and the `trivia` table is created on connect.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};

use super::repos::{DbError, PgTriviaRepo, SqliteTriviaRepo, TriviaStore};

/// Default maximum connections for the pool.
/// Kept low for a single small service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Storage backend selected by URL scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(database_url: &str) -> Result<Self, DbError> {
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            Ok(Self::Postgres)
        } else if database_url.starts_with("sqlite:") {
            Ok(Self::Sqlite)
        } else {
            Err(DbError::UnsupportedUrl(redact(database_url)))
        }
    }
}

/// Connect to the store named by `database_url` and ensure the schema.
///
/// # Example
///
/// ```ignore
/// let store = connect("sqlite://trivia.db").await?;
/// run_server(store, ServerConfig::default()).await?;
/// ```
pub async fn connect(database_url: &str) -> Result<Arc<dyn TriviaStore>, DbError> {
    connect_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Connect with a custom pool size.
///
/// In-memory SQLite URLs always get a single pinned connection.
pub async fn connect_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<Arc<dyn TriviaStore>, DbError> {
    let backend = Backend::from_url(database_url)?;

    let store: Arc<dyn TriviaStore> = match backend {
        Backend::Postgres => {
            let repo = PgTriviaRepo::new(create_pg_pool(database_url, max_connections).await?);
            repo.init_schema().await?;
            Arc::new(repo)
        }
        Backend::Sqlite => {
            let repo =
                SqliteTriviaRepo::new(create_sqlite_pool(database_url, max_connections).await?);
            repo.init_schema().await?;
            Arc::new(repo)
        }
    };

    tracing::info!(?backend, max_connections, "database connected");
    Ok(store)
}

/// Create a PostgreSQL connection pool.
pub async fn create_pg_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Create a SQLite connection pool, creating the database file if missing.
pub async fn create_sqlite_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // Each connection to :memory: is its own database, so keep exactly one alive
    let pool_options = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    pool_options.connect_with(options).await
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Strip credentials before a URL reaches logs or error messages.
fn redact(database_url: &str) -> String {
    match (database_url.find("://"), database_url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &database_url[..scheme_end], &database_url[at..])
        }
        _ => database_url.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_from_scheme() {
        assert_eq!(Backend::from_url("postgres://localhost/trivia").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("postgresql://u:p@db/trivia").unwrap(), Backend::Postgres);
        assert_eq!(Backend::from_url("sqlite://trivia.db").unwrap(), Backend::Sqlite);
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
    }

    #[test]
    fn unsupported_url_hides_credentials() {
        let err = Backend::from_url("mysql://root:hunter2@db/trivia").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unsupported database URL"));
        assert!(msg.contains("mysql://***@db/trivia"));
        assert!(!msg.contains("hunter2"));
    }

    #[tokio::test]
    async fn memory_store_is_shared_across_calls() {
        let store = connect("sqlite::memory:").await.unwrap();
        let new = crate::models::NewTrivia::new("q", "a", None, None).unwrap();

        let created = store.insert(&new).await.unwrap();
        // A second pooled connection would see an empty database
        assert_eq!(store.list().await.unwrap().len(), 1);
        assert_eq!(store.get(created.id).await.unwrap().map(|t| t.id), Some(created.id));
    }

    #[tokio::test]
    async fn sqlite_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trivia.db");
        let url = format!("sqlite://{}", path.display());

        let store = connect(&url).await.unwrap();
        assert!(path.exists());
        assert!(store.list().await.unwrap().is_empty());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p triviactl-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pg_pool(&url, DEFAULT_MAX_CONNECTIONS)
            .await
            .expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
