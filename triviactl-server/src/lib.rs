//! triviactl-server: HTTP record service for trivia questions
//!
//! Exposes create, fetch-by-id, and list operations over a relational
//! store (PostgreSQL or SQLite), plus a health check.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{connect, DbError, TriviaStore};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
