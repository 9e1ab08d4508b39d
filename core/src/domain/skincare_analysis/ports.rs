use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    skincare_analysis::{
        entities::{AnalysisResult, ModelHandle},
        value_objects::AnalyzeProductsInput,
    },
};

/// LLM Client trait for calling generative text models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Look up a model by identifier and confirm it can generate content.
    fn resolve_model(
        &self,
        model_name: String,
    ) -> impl Future<Output = Result<ModelHandle, CoreError>> + Send;

    fn generate_text(
        &self,
        model: ModelHandle,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for skincare analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait SkincareAnalysisService: Send + Sync {
    fn analyze_products(
        &self,
        input: AnalyzeProductsInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;
}
