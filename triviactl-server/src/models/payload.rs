//! Request body validation for `POST /api/trivia`

use serde_json::{Map, Value};

use super::{NewTrivia, ValidationError};

/// Parse and validate a raw request body into a candidate record.
///
/// A missing `Content-Type` is tolerated; a present one must be JSON.
/// `null`, `{}`, and non-object bodies are rejected as invalid payloads.
pub fn parse_payload(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<NewTrivia, ValidationError> {
    if let Some(ct) = content_type {
        if !is_json_content_type(ct) {
            return Err(ValidationError::InvalidPayload);
        }
    }

    if body.is_empty() {
        return Err(ValidationError::InvalidPayload);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|_| ValidationError::InvalidPayload)?;

    let map = match value {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(ValidationError::InvalidPayload),
    };

    let (Some(question), Some(answer)) = (text_field(&map, "question"), text_field(&map, "answer"))
    else {
        return Err(ValidationError::MissingRequiredField);
    };

    NewTrivia::new(
        question,
        answer,
        text_field(&map, "category"),
        text_field(&map, "difficulty"),
    )
}

/// Read a field as text. Null counts as absent; non-string values keep
/// their compact JSON text.
fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
