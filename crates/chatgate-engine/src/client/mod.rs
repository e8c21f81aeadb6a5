use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use chatgate_models::Role;

use crate::catalog::ResolvedModel;

pub mod auto;
pub mod openai_compat;

/// One validated conversation turn handed to the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Result of a completion call.
///
/// The provider is attributed by the engine itself, per call. `None`
/// means the engine could not say which backend serviced the call.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub provider: Option<String>,
}

/// Completion engine trait - unified interface over AI chat backends
#[async_trait]
pub trait CompletionEngine: Send + Sync {
    /// Model identifiers the engine recognizes, in canonical
    /// underscore form (e.g. "gpt_4o_mini").
    fn models(&self) -> Result<Vec<String>>;

    /// Engine version string, surfaced in /api/info
    fn version(&self) -> String {
        "unknown".to_string()
    }

    /// Run one completion for a catalog-resolved model
    async fn create(&self, model: &ResolvedModel, messages: &[ChatMessage]) -> Result<Completion>;
}
