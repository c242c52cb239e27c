// Structured generation adapters: inclusive JD drafting and role
// refinement / Boolean search building.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod jd;
pub mod normalize;
pub mod prompts;
pub mod refinement;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::{extract_json_object, strip_json_fences, LlmError};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("generation call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("model reply contained no parsable JSON: {0}")]
    Parse(String),

    #[error("schema validation failed: {0}")]
    Schema(String),
}

/// Parses a value of type `T` out of a raw model reply.
///
/// Order of attempts: strip code fences, direct JSON parse, then the
/// substring between the first `{` and the last `}`. A reply surviving
/// neither attempt is a parse error — no further guessing, no retry.
/// Valid JSON that does not fit the target shape is a schema error.
pub fn parse_model_json<T: DeserializeOwned>(reply: &str) -> Result<T, GenerationError> {
    let value = extract_json_value(reply)?;
    serde_json::from_value(value).map_err(|e| GenerationError::Schema(e.to_string()))
}

fn extract_json_value(reply: &str) -> Result<serde_json::Value, GenerationError> {
    let stripped = strip_json_fences(reply);
    match serde_json::from_str(stripped) {
        Ok(value) => Ok(value),
        Err(first_err) => match extract_json_object(stripped) {
            Some(object) => {
                serde_json::from_str(object).map_err(|e| GenerationError::Parse(e.to_string()))
            }
            None => Err(GenerationError::Parse(first_err.to_string())),
        },
    }
}

/// Deserializes an empty JSON object (or `null`) as `None`.
/// Adapter results carry `{}` for the nested object when status is not ok.
pub(crate) fn empty_object_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) if map.is_empty() => Ok(None),
        _ => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Serializes `None` as the empty object `{}` so "not ok" results carry an
/// explicitly empty nested object rather than `null`.
pub(crate) fn none_as_empty_object<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

/// Structured error envelope printed by the adapter binaries.
/// Every failure surfaces as a result object, never as a process crash.
pub fn error_output(err: &GenerationError) -> serde_json::Value {
    let code = match err {
        GenerationError::Configuration(_) => "CONFIGURATION_ERROR",
        GenerationError::Llm(_) => "EXTERNAL_CALL_FAILURE",
        GenerationError::Parse(_) => "PARSE_ERROR",
        GenerationError::Schema(_) => "SCHEMA_VALIDATION_ERROR",
    };
    json!({
        "status": "error",
        "missing_info": [],
        "notes": format!("{code}: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        status: String,
    }

    #[test]
    fn test_parse_model_json_direct() {
        let probe: Probe = parse_model_json(r#"{"status": "ok"}"#).unwrap();
        assert_eq!(probe.status, "ok");
    }

    #[test]
    fn test_parse_model_json_fenced_equals_unfenced() {
        let fenced: Probe = parse_model_json("```json\n{\"status\": \"ok\"}\n```").unwrap();
        let plain: Probe = parse_model_json("{\"status\": \"ok\"}").unwrap();
        assert_eq!(fenced, plain);
    }

    #[test]
    fn test_parse_model_json_brace_scan_fallback() {
        let reply = "Here you go:\n{\"status\": \"ok\"}\nHope that helps!";
        let probe: Probe = parse_model_json(reply).unwrap();
        assert_eq!(probe.status, "ok");
    }

    #[test]
    fn test_parse_model_json_no_json_is_parse_error() {
        let err = parse_model_json::<Probe>("I cannot answer that.").unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn test_parse_model_json_wrong_shape_is_schema_error() {
        let err = parse_model_json::<Probe>(r#"{"other": 1}"#).unwrap_err();
        assert!(matches!(err, GenerationError::Schema(_)));
    }

    #[test]
    fn test_error_output_tags_configuration_errors() {
        let err = GenerationError::Configuration("GEMINI_API_KEY is not set".to_string());
        let value = error_output(&err);
        assert_eq!(value["status"], "error");
        let notes = value["notes"].as_str().unwrap();
        assert!(notes.starts_with("CONFIGURATION_ERROR"));
        assert!(notes.contains("GEMINI_API_KEY"));
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(
            default,
            deserialize_with = "empty_object_as_none",
            serialize_with = "none_as_empty_object"
        )]
        inner: Option<Probe2>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Probe2 {
        name: String,
    }

    #[test]
    fn test_empty_object_round_trips_as_none() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"inner": {}}"#).unwrap();
        assert!(wrapper.inner.is_none());
        let rendered = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(rendered, r#"{"inner":{}}"#);
    }

    #[test]
    fn test_populated_object_round_trips_as_some() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"inner": {"name": "x"}}"#).unwrap();
        assert_eq!(wrapper.inner.as_ref().unwrap().name, "x");
    }
}
