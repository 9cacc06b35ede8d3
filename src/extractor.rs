//! Per-listing extraction: prompt → model call → parse → derive.

use crate::calculator::calculate;
use crate::llm::client::OpenRouterClient;
use crate::llm::parser::parse_model_response;
use crate::llm::prompts::build_extraction_prompt;
use crate::record::EnrichedRecord;
use log::error;
use serde_json::Map;

/// The original deployment target; free tier, good enough at field pulling.
const DEFAULT_MODEL: &str = "qwen/qwen3-235b-a22b:free";

pub struct AircraftDataExtractor {
    client: OpenRouterClient,
    model: String,
}

impl AircraftDataExtractor {
    pub fn new(client: OpenRouterClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model id, e.g. to trade cost for extraction quality.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Runs the full pipeline for one listing description.
    ///
    /// Infallible by design: any API or parse failure yields an empty
    /// record so a batch run can keep going. Each description is attempted
    /// exactly once; there are no retries.
    pub async fn extract(&self, description: &str) -> EnrichedRecord {
        let prompt = build_extraction_prompt(description);

        let raw_response = match self.client.complete(&self.model, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                error!("model call failed: {}", e);
                return Map::new();
            }
        };

        let extracted = parse_model_response(&raw_response);
        if extracted.is_empty() {
            return Map::new();
        }

        calculate(extracted)
    }
}
