//! Domain models with validation at construction
//!
//! Request bodies are checked once, when they become a `NewTrivia`.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod trivia;
pub mod payload;

pub use validation::ValidationError;
pub use trivia::{NewTrivia, TriviaRecord, TriviaResponse, MAX_TEXT_LEN};
pub use payload::parse_payload;
