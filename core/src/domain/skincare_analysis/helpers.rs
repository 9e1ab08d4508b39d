use std::sync::OnceLock;

use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

fn re_leading_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^```[A-Za-z0-9_+-]*[ \t]*\r?\n?").unwrap())
}

fn re_trailing_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*```$").unwrap())
}

/// Remove a markdown code fence (```json ... ```) wrapping a model reply.
/// Text without a fence is only trimmed.
pub fn strip_code_fence(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_open = re_leading_fence().replace(trimmed, "");
    let without_close = re_trailing_fence().replace(&without_open, "");
    without_close.trim().to_string()
}

/// Strip fencing from a raw model reply and parse what remains as JSON.
pub fn parse_model_json(raw: &str) -> Result<serde_json::Value, CoreError> {
    let cleaned = strip_code_fence(raw);

    serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!(error = %e, raw_output = %raw, "Model returned invalid JSON");
        CoreError::InvalidModelResponse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strip_fence_with_language_tag() {
        let raw = "```json\n{\"products\": []}\n```";
        assert_eq!(strip_code_fence(raw), "{\"products\": []}");
    }

    #[test]
    fn test_strip_fence_without_language_tag() {
        let raw = "  ```\n{\"a\": 1}\n```  \n";
        assert_eq!(strip_code_fence(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fence("\n {\"a\": 1} \n"), "{\"a\": 1}");
    }

    #[test]
    fn test_fenced_and_unfenced_parse_identically() {
        let body = r#"{"products":[{"name":"Retinol"}],"conflicts":[]}"#;
        let fenced = format!("```json\n{}\n```", body);

        let from_fenced = parse_model_json(&fenced).unwrap();
        let from_plain = parse_model_json(body).unwrap();

        assert_eq!(from_fenced, from_plain);
        assert_eq!(from_plain["products"][0]["name"], json!("Retinol"));
    }

    #[test]
    fn test_invalid_json_is_a_format_error() {
        let err = parse_model_json("```json\nSure! Here is your routine\n```").unwrap_err();
        assert!(matches!(err, CoreError::InvalidModelResponse(_)));
    }
}
