//! Turning raw text into card schemas.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::card::CardSchema;

/// The bundled "Project Approval Workflow" card.
pub const SAMPLE_CARD_JSON: &str = include_str!("../samples/approval_card.json");

/// Reasons a piece of text is not a usable card.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The text is not valid JSON.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// Valid JSON, but the root is not an object.
    #[error("card root must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}

/// What the host hands the renderer for one pass: either a schema or the
/// knowledge that no valid schema is available.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaSource {
    Ready(CardSchema),
    Broken { reason: String },
}

impl SchemaSource {
    /// Parse editor text. Never fails; parse errors become [`SchemaSource::Broken`].
    pub fn from_text(text: &str) -> Self {
        match parse_card_schema(text) {
            Ok(schema) => Self::Ready(schema),
            Err(err) => {
                debug!(error = %err, "card schema rejected");
                Self::Broken {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn schema(&self) -> Option<&CardSchema> {
        match self {
            Self::Ready(schema) => Some(schema),
            Self::Broken { .. } => None,
        }
    }

    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken { .. })
    }
}

impl From<CardSchema> for SchemaSource {
    fn from(schema: CardSchema) -> Self {
        Self::Ready(schema)
    }
}

/// Parse a card from JSON text.
pub fn parse_card_schema(text: &str) -> Result<CardSchema, SchemaError> {
    let value: Value = serde_json::from_str(text)?;
    CardSchema::from_value(&value).ok_or(SchemaError::NotAnObject(json_type_name(&value)))
}

/// Read a card file. I/O failures are errors; parse failures are reported as
/// a broken source so the caller can still render something.
pub fn load_card_schema(path: &Path) -> Result<SchemaSource> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read card schema: {}", path.display()))?;
    Ok(SchemaSource::from_text(&text))
}

pub fn sample_card_schema() -> CardSchema {
    parse_card_schema(SAMPLE_CARD_JSON).expect("bundled sample card should parse")
}

pub fn sample_card_source() -> SchemaSource {
    SchemaSource::Ready(sample_card_schema())
}

/// Editor text for "reset to sample": the bundled card, pretty-printed with
/// two-space indentation.
pub fn sample_card_pretty() -> String {
    let value: Value =
        serde_json::from_str(SAMPLE_CARD_JSON).expect("bundled sample card should parse");
    serde_json::to_string_pretty(&value).expect("JSON values always serialize")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_errors_carry_position() {
        let err = parse_card_schema("{\n  \"title\": ").unwrap_err();
        match err {
            SchemaError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = parse_card_schema("[]").unwrap_err();
        assert!(matches!(err, SchemaError::NotAnObject("an array")));
        assert_eq!(err.to_string(), "card root must be a JSON object, found an array");
    }

    #[test]
    fn pretty_sample_reparses_to_the_same_card() {
        let pretty = sample_card_pretty();
        assert!(pretty.starts_with("{\n  \"title\": \"Project Approval Workflow\""));
        assert_eq!(parse_card_schema(&pretty).unwrap(), sample_card_schema());
    }

    #[test]
    fn from_text_never_fails() {
        let source = SchemaSource::from_text("{ not json");
        assert!(source.is_broken());
        assert!(source.schema().is_none());

        let source = SchemaSource::from_text(r#"{"title": "ok", "body": []}"#);
        assert_eq!(source.schema().map(|s| s.title.as_str()), Some("ok"));
    }
}
