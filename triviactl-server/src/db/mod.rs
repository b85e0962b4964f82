//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - The store is injected as `Arc<dyn TriviaStore>`, never a global
//! - Identity and creation timestamp come from column defaults
//! - Writes run in a transaction that rolls back on drop
//! - Lists are ordered by id (insertion order)

pub mod pool;
pub mod repos;

pub use pool::{connect, connect_with_options, Backend};
pub use repos::*;
