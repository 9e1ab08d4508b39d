use tracing::{debug, error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    email_summary::ports::MailSender,
    skincare_analysis::{
        entities::AnalysisResult,
        helpers::parse_model_json,
        ports::{LLMClient, SkincareAnalysisService},
        prompt::build_analysis_prompt,
        schema::get_skincare_analysis_schema,
        value_objects::AnalyzeProductsInput,
    },
};

pub const PRODUCTS_REQUIRED: &str = "Products array is required.";

impl<LLM, M> Service<LLM, M>
where
    LLM: LLMClient,
    M: MailSender,
{
    /// Try each candidate model in order until one resolves and generates.
    /// Each candidate is attempted once; calls are strictly sequential.
    async fn generate_with_fallback(&self, prompt: String) -> Result<String, CoreError> {
        let response_schema = get_skincare_analysis_schema();
        let mut last_error: Option<CoreError> = None;

        for model_name in &self.candidate_models {
            let model = match self.llm_client.resolve_model(model_name.clone()).await {
                Ok(model) => model,
                Err(e) => {
                    warn!(model = %model_name, error = %e, "Failed to resolve model, trying next candidate");
                    last_error = Some(e);
                    continue;
                }
            };

            match self
                .llm_client
                .generate_text(model, prompt.clone(), response_schema.clone())
                .await
            {
                Ok(text) => {
                    info!(model = %model_name, "Model generated analysis");
                    return Ok(text);
                }
                Err(e) => {
                    warn!(model = %model_name, error = %e, "Model failed to generate, trying next candidate");
                    last_error = Some(e);
                }
            }
        }

        error!(
            candidates = ?self.candidate_models,
            "All candidate models failed"
        );

        Err(CoreError::ExternalServiceError(
            last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no candidate models configured".to_string()),
        ))
    }
}

impl<LLM, M> SkincareAnalysisService for Service<LLM, M>
where
    LLM: LLMClient,
    M: MailSender,
{
    #[instrument(skip(self, input), fields(product_count = input.products.len()))]
    async fn analyze_products(
        &self,
        input: AnalyzeProductsInput,
    ) -> Result<AnalysisResult, CoreError> {
        // 1. Validate input
        if input.products.is_empty() {
            return Err(CoreError::Validation(PRODUCTS_REQUIRED.to_string()));
        }

        // 2. Build prompt
        let prompt = build_analysis_prompt(&input.products);

        // 3. Call LLM, falling back through the candidate models
        let raw_response = self.generate_with_fallback(prompt).await?;
        debug!(raw_output = %raw_response, "Raw model output");

        // 4. Parse and repair the response
        let parsed = parse_model_json(&raw_response)?;

        Ok(self.normalizer.normalize(&parsed))
    }
}
