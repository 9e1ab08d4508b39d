use serde_json::Value;

use crate::domain::skincare_analysis::entities::{
    AnalysisResult, Conflict, ProductAnalysis, RecommendedRoutine,
};

pub const UNNAMED_PRODUCT: &str = "Unnamed Product";
pub const UNSPECIFIED_REASON: &str = "unspecified";

/// One way a model may have expressed the products taking part in a conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantRule {
    /// An array field, e.g. `{"products": ["A", "B"]}`.
    ListField(String),
    /// Two singular fields, e.g. `{"productA": "A", "productB": "B"}`.
    PairFields(String, String),
    /// A single string field listing the products, e.g. `{"products": "A & B"}`.
    StringField(String),
    /// The conflict entry is itself a string.
    BareString,
}

/// Accepted conflict shapes, tried in priority order. The defaults cover every
/// shape models have been seen to produce; callers may extend them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictShapeRules {
    pub participant_rules: Vec<ParticipantRule>,
    pub reason_fields: Vec<String>,
    pub name_fields: Vec<String>,
    pub separators: Vec<String>,
}

impl Default for ConflictShapeRules {
    fn default() -> Self {
        Self {
            participant_rules: vec![
                ParticipantRule::ListField("products".to_string()),
                ParticipantRule::ListField("items".to_string()),
                ParticipantRule::PairFields("productA".to_string(), "productB".to_string()),
                ParticipantRule::PairFields("product1".to_string(), "product2".to_string()),
                ParticipantRule::StringField("products".to_string()),
                ParticipantRule::StringField("items".to_string()),
                ParticipantRule::StringField("pair".to_string()),
                ParticipantRule::BareString,
            ],
            reason_fields: ["reason", "explanation", "description", "details"]
                .into_iter()
                .map(String::from)
                .collect(),
            name_fields: ["name", "productName", "product", "title"]
                .into_iter()
                .map(String::from)
                .collect(),
            separators: ["&", "+", ",", ";"].into_iter().map(String::from).collect(),
        }
    }
}

impl ConflictShapeRules {
    /// Append a participant rule; it is tried after the existing ones.
    pub fn with_participant_rule(mut self, rule: ParticipantRule) -> Self {
        self.participant_rules.push(rule);
        self
    }

    pub fn with_reason_field(mut self, field: impl Into<String>) -> Self {
        self.reason_fields.push(field.into());
        self
    }

    pub fn with_name_field(mut self, field: impl Into<String>) -> Self {
        self.name_fields.push(field.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.push(separator.into());
        self
    }
}

impl ParticipantRule {
    /// Returns the participants when the entry has this rule's shape.
    fn apply(&self, entry: &Value, normalizer: &ResponseNormalizer) -> Option<Vec<String>> {
        match self {
            ParticipantRule::ListField(field) => match entry.get(field) {
                Some(Value::Array(items)) if !items.is_empty() => Some(
                    items
                        .iter()
                        .map(|item| normalizer.coerce_participant(item))
                        .collect(),
                ),
                _ => None,
            },
            ParticipantRule::PairFields(first, second) => {
                let first = entry.get(first).filter(|value| is_present(value))?;
                let second = entry.get(second).filter(|value| is_present(value))?;

                Some(vec![
                    normalizer.coerce_participant(first),
                    normalizer.coerce_participant(second),
                ])
            }
            ParticipantRule::StringField(field) => entry
                .get(field)
                .and_then(Value::as_str)
                .filter(|text| !text.trim().is_empty())
                .map(|text| normalizer.split_participants(text)),
            ParticipantRule::BareString => entry
                .as_str()
                .filter(|text| !text.trim().is_empty())
                .map(|text| normalizer.split_participants(text)),
        }
    }
}

/// Repairs an untrusted model reply into a complete [`AnalysisResult`].
///
/// Normalization never fails: missing or malformed fields are replaced with
/// safe defaults, and conflicts with fewer than two participants are dropped.
/// Applying it to its own serialized output yields the same result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseNormalizer {
    rules: ConflictShapeRules,
}

impl ResponseNormalizer {
    pub fn new(rules: ConflictShapeRules) -> Self {
        Self { rules }
    }

    pub fn normalize(&self, raw: &Value) -> AnalysisResult {
        let products = match raw.get("products") {
            Some(Value::Array(entries)) => entries
                .iter()
                .map(|entry| self.normalize_product(entry))
                .collect(),
            _ => Vec::new(),
        };

        let conflicts = match raw.get("conflicts") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| self.normalize_conflict(entry))
                .collect(),
            _ => Vec::new(),
        };

        AnalysisResult {
            products,
            recommended_routine: self.normalize_routine(raw.get("recommendedRoutine")),
            conflicts,
        }
    }

    fn normalize_product(&self, entry: &Value) -> ProductAnalysis {
        if let Some(name) = entry.as_str() {
            return ProductAnalysis {
                name: non_blank(name).unwrap_or(UNNAMED_PRODUCT).to_string(),
                description: String::new(),
                usage_time: Vec::new(),
                frequency: String::new(),
                conflicts_with: Vec::new(),
            };
        }

        let mut usage_time: Vec<String> = Vec::new();
        for slot in self.coerce_list(entry.get("usageTime")) {
            if !usage_time.contains(&slot) {
                usage_time.push(slot);
            }
        }

        ProductAnalysis {
            name: entry
                .get("name")
                .and_then(scalar_text)
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| UNNAMED_PRODUCT.to_string()),
            description: entry
                .get("description")
                .and_then(scalar_text)
                .unwrap_or_default(),
            usage_time,
            frequency: entry
                .get("frequency")
                .and_then(scalar_text)
                .unwrap_or_default(),
            conflicts_with: self.coerce_list(entry.get("conflictsWith")),
        }
    }

    fn normalize_conflict(&self, entry: &Value) -> Option<Conflict> {
        let products = self
            .rules
            .participant_rules
            .iter()
            .find_map(|rule| rule.apply(entry, self))?;

        if products.len() < 2 {
            tracing::debug!(?entry, "Dropping conflict with fewer than two products");
            return None;
        }

        let reason = self
            .rules
            .reason_fields
            .iter()
            .find_map(|field| entry.get(field).and_then(Value::as_str).and_then(non_blank))
            .unwrap_or(UNSPECIFIED_REASON)
            .to_string();

        Some(Conflict { products, reason })
    }

    fn normalize_routine(&self, routine: Option<&Value>) -> RecommendedRoutine {
        match routine {
            Some(routine) if routine.is_object() => RecommendedRoutine {
                am: self.coerce_list(routine.get("AM")),
                pm: self.coerce_list(routine.get("PM")),
            },
            _ => RecommendedRoutine::default(),
        }
    }

    fn coerce_list(&self, value: Option<&Value>) -> Vec<String> {
        match value {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| self.coerce_participant(item))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Turn any JSON value into a product identifier without dropping it.
    fn coerce_participant(&self, value: &Value) -> String {
        match value {
            Value::String(text) => text.clone(),
            Value::Object(fields) => self
                .rules
                .name_fields
                .iter()
                .find_map(|field| fields.get(field).and_then(Value::as_str).and_then(non_blank))
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
            other => other.to_string(),
        }
    }

    fn split_participants(&self, text: &str) -> Vec<String> {
        let mut parts = vec![text.to_string()];
        for separator in &self.rules.separators {
            parts = parts
                .iter()
                .flat_map(|part| part.split(separator.as_str()))
                .map(str::to_string)
                .collect();
        }

        parts
            .into_iter()
            .map(|part| part.trim().to_string())
            .filter(|part| !part.is_empty())
            .collect()
    }
}

fn non_blank(text: &str) -> Option<&str> {
    (!text.trim().is_empty()).then_some(text)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
