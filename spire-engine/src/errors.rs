use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpireError {
    /// The snapshot root was not a JSON object.
    #[error("invalid snapshot: expected a JSON object, found {found}")]
    InvalidInput { found: &'static str },
    /// Snapshot text could not be parsed as JSON.
    #[error("malformed snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpireError {
    pub(crate) fn not_an_object(value: &Value) -> Self {
        SpireError::InvalidInput {
            found: json_kind(value),
        }
    }
}

pub type SpireResult<T> = Result<T, SpireError>;

/// Short JSON type name used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invalid_input_names_the_json_kind() {
        let err = SpireError::not_an_object(&json!([1, 2]));
        assert_eq!(
            err.to_string(),
            "invalid snapshot: expected a JSON object, found array"
        );
    }

    #[test]
    fn parse_errors_convert() {
        let parse = serde_json::from_str::<Value>("{").unwrap_err();
        let err: SpireError = parse.into();
        assert!(matches!(err, SpireError::Json(_)));
    }
}
