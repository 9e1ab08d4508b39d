use serde_json::Value;

/// A fully rendered message handed to the mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct SendSummaryInput {
    pub email: String,
    /// A previously returned analysis; re-normalized before formatting.
    pub analysis_result: Value,
}

/// `null`, `false`, `0` and blank strings do not count as a supplied analysis.
pub fn is_missing_value(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}
