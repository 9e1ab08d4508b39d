use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product as supplied by the caller. Identified by position, not by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
}

impl Product {
    pub fn new(name: impl Into<String>, product_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            product_type: product_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalysis {
    pub name: String,
    pub description: String,
    pub usage_time: Vec<String>,
    pub frequency: String,
    pub conflicts_with: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Conflict {
    pub products: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendedRoutine {
    #[serde(rename = "AM")]
    pub am: Vec<String>,
    #[serde(rename = "PM")]
    pub pm: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub products: Vec<ProductAnalysis>,
    pub recommended_routine: RecommendedRoutine,
    pub conflicts: Vec<Conflict>,
}

/// A model that has been confirmed to exist and support text generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle {
    pub name: String,
}

impl ModelHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
