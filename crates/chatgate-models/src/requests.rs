use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

/// One turn of conversation history as sent by the client.
///
/// The role is kept as a plain string here; the gateway validates it
/// against [`crate::Role`] so bad roles get the contract's 400 detail
/// instead of a deserializer error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Body of POST /api/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<Message>,
    #[serde(default = "default_model")]
    pub model: String,
}
