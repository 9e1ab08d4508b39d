use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    skincare_analysis::{entities::ModelHandle, ports::LLMClient},
};

const GENERATE_CONTENT: &str = "generateContent";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfo {
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &LLMConfig) -> Self {
        Self::new(
            config.gemini_api_key.clone(),
            config.gemini_base_url.clone(),
        )
    }

    /// URLs show up in transport errors, so the API key is sent as a header.
    fn model_url(&self, model_name: &str, action: Option<&str>) -> String {
        match action {
            Some(action) => format!("{}/models/{}:{}", self.base_url, model_name, action),
            None => format!("{}/models/{}", self.base_url, model_name),
        }
    }

    async fn ensure_success(
        response: reqwest::Response,
        model_name: &str,
    ) -> Result<reqwest::Response, CoreError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!(model = %model_name, "Gemini API error: {} - {}", status, error_text);
        Err(CoreError::ExternalServiceError(format!(
            "LLM API returned error: {} - {}",
            status, error_text
        )))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn resolve_model(&self, model_name: String) -> Result<ModelHandle, CoreError> {
        let response = self
            .client
            .get(self.model_url(&model_name, None))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini model lookup failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let response = Self::ensure_success(response, &model_name).await?;

        let info: ModelInfo = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini model info: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse model info: {}", e))
        })?;

        if !info
            .supported_generation_methods
            .iter()
            .any(|method| method == GENERATE_CONTENT)
        {
            return Err(CoreError::ExternalServiceError(format!(
                "model {} does not support {}",
                model_name, GENERATE_CONTENT
            )));
        }

        Ok(ModelHandle::new(model_name))
    }

    async fn generate_text(
        &self,
        model: ModelHandle,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        let response = self
            .client
            .post(self.model_url(&model.name, Some(GENERATE_CONTENT)))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let response = Self::ensure_success(response, &model.name).await?;

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}
