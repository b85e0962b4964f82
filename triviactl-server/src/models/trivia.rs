//! Trivia record types and wire mapping
//!
//! `NewTrivia` is a validated candidate row (no id, no timestamp).
//! `TriviaRecord` is a stored row. `TriviaResponse` is the JSON shape
//! returned by every endpoint that yields a record.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length, in characters, for `question` and `answer`
pub const MAX_TEXT_LEN: usize = 500;

/// Validated candidate for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrivia {
    question: String,
    answer: String,
    category: Option<String>,
    difficulty: Option<String>,
}

impl NewTrivia {
    /// Build a candidate record.
    ///
    /// # Rules
    /// - `question` and `answer` must be non-empty
    /// - `question` and `answer` are at most 500 characters
    /// - `category` and `difficulty` are taken as-is
    ///
    /// # Example
    /// ```
    /// use triviactl_server::models::NewTrivia;
    ///
    /// let new = NewTrivia::new("What is 2+2?", "4", None, None).unwrap();
    /// assert_eq!(new.question(), "What is 2+2?");
    /// assert!(NewTrivia::new("", "4", None, None).is_err());
    /// ```
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Option<String>,
        difficulty: Option<String>,
    ) -> Result<Self, ValidationError> {
        let question = question.into();
        let answer = answer.into();

        if question.is_empty() || answer.is_empty() {
            return Err(ValidationError::MissingRequiredField);
        }

        check_len("question", &question)?;
        check_len("answer", &answer)?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }
}

fn check_len(field: &'static str, value: &str) -> Result<(), ValidationError> {
    // Counted in chars to match VARCHAR semantics, not bytes
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

/// Trivia record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct TriviaRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Trivia response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriviaResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: Option<String>,
}

impl From<TriviaRecord> for TriviaResponse {
    fn from(t: TriviaRecord) -> Self {
        Self {
            id: t.id,
            question: t.question,
            answer: t.answer,
            category: t.category,
            difficulty: t.difficulty,
            created_at: Some(t.created_at.to_rfc3339_opts(SecondsFormat::Micros, true)),
        }
    }
}
