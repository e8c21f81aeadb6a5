use anyhow::Result;
use async_trait::async_trait;
use log::warn;
use std::collections::BTreeMap;

use crate::catalog::ResolvedModel;
use crate::client::{ChatMessage, Completion, CompletionEngine};
use crate::client::openai_compat::OpenAiCompatBackend;

/// Catalog identifiers and the upstream model ids they map to.
/// This table is the engine's registered model list.
const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("gpt_4o_mini", "gpt-4o-mini"),
    ("gpt_4o", "gpt-4o"),
    ("gpt_4", "gpt-4"),
    ("gpt_3_5_turbo", "gpt-3.5-turbo"),
    ("llama_3_1_8b", "meta-llama/llama-3.1-8b-instruct"),
    ("llama_3_1_70b", "meta-llama/llama-3.1-70b-instruct"),
    ("mixtral_8x7b", "mistralai/mixtral-8x7b-instruct"),
    ("qwen_2_5_72b", "qwen/qwen-2.5-72b-instruct"),
    ("gemini_pro", "gemini-pro"),
    ("claude_3_haiku", "claude-3-haiku"),
];

/// Engine that routes a completion across an ordered list of
/// OpenAI-compatible backends, returning the first success together
/// with the name of the backend that produced it.
pub struct AutoEngine {
    backends: Vec<OpenAiCompatBackend>,
    registry: BTreeMap<String, String>,
}

impl AutoEngine {
    pub fn new(backends: Vec<OpenAiCompatBackend>) -> Self {
        let registry = DEFAULT_MODELS
            .iter()
            .map(|(name, id)| (name.to_string(), id.to_string()))
            .collect();
        Self { backends, registry }
    }

    /// Replace the built-in model registry (catalog name -> upstream id)
    pub fn with_registry(mut self, registry: BTreeMap<String, String>) -> Self {
        self.registry = registry;
        self
    }
}

#[async_trait]
impl CompletionEngine for AutoEngine {
    fn models(&self) -> Result<Vec<String>> {
        Ok(self.registry.keys().cloned().collect())
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    async fn create(&self, model: &ResolvedModel, messages: &[ChatMessage]) -> Result<Completion> {
        let upstream_id = self
            .registry
            .get(model.name())
            .ok_or_else(|| anyhow::anyhow!("model '{}' is not registered", model.name()))?;

        let mut last_err = anyhow::anyhow!("no backends configured");
        for backend in &self.backends {
            match backend.chat_completion(upstream_id, messages).await {
                Ok(text) => {
                    return Ok(Completion {
                        text,
                        provider: Some(backend.name().to_string()),
                    })
                }
                Err(err) => {
                    warn!("backend {} failed: {err:#}", backend.name());
                    last_err = err;
                }
            }
        }
        Err(last_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contains_default_model() {
        let engine = AutoEngine::new(Vec::new());
        let models = engine.models().unwrap();
        assert!(models.contains(&"gpt_4o_mini".to_string()));
    }

    #[test]
    fn test_models_are_sorted_and_underscored() {
        let engine = AutoEngine::new(Vec::new());
        let models = engine.models().unwrap();
        let mut sorted = models.clone();
        sorted.sort();
        assert_eq!(models, sorted);
        assert!(models.iter().all(|m| !m.contains('-')));
    }
}
