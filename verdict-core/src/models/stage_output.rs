use serde::Serialize;
use serde_json::Value;

/// Typed result of parsing an LLM response for one pipeline stage.
///
/// A parse failure never aborts a run; it yields the stage-specific
/// fallback object instead. Keeping the two cases distinct lets callers
/// tell "degraded but completed" apart from a clean result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StageOutput {
    /// The LLM response parsed as valid JSON.
    Parsed(Value),
    /// The response was not valid JSON; this is the stage fallback.
    Fallback(Value),
}

impl StageOutput {
    /// Parse a raw LLM response, substituting `fallback` on invalid JSON.
    pub fn parse_or(raw: &str, fallback: Value) -> Self {
        match serde_json::from_str::<Value>(raw.trim()) {
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Fallback(fallback),
        }
    }

    /// The underlying JSON value, regardless of how it was produced.
    pub fn value(&self) -> &Value {
        match self {
            Self::Parsed(v) | Self::Fallback(v) => v,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl Default for StageOutput {
    fn default() -> Self {
        Self::Parsed(Value::Object(serde_json::Map::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_json_parses() {
        let out = StageOutput::parse_or(r#"{"pros": ["a"]}"#, json!({"pros": []}));
        assert!(!out.is_degraded());
        assert_eq!(out.value(), &json!({"pros": ["a"]}));
    }

    #[test]
    fn invalid_json_falls_back() {
        let out = StageOutput::parse_or("I think the claim is true.", json!({"pros": []}));
        assert!(out.is_degraded());
        assert_eq!(out.value(), &json!({"pros": []}));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let out = StageOutput::parse_or("  {\"confidence\": 1}\n", json!({}));
        assert!(!out.is_degraded());
    }

    #[test]
    fn serializes_as_inner_value() {
        let out = StageOutput::Fallback(json!({"final_recommendation": "Undecided"}));
        let text = serde_json::to_string(&out).unwrap();
        assert_eq!(text, r#"{"final_recommendation":"Undecided"}"#);
    }
}
