use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of a successful POST /api/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    /// Canonical hyphenated model name, e.g. "gpt-4o-mini"
    pub model: String,
    /// Backend that serviced the call, or "Unknown"
    pub provider: String,
}

/// Body of GET /api/models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListModelsResponse {
    pub models: Vec<String>,
}

/// Body of GET /api/info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub engine_version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Body of GET /
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub message: String,
}
