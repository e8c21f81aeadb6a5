// Models module - data structures for the gateway API
pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used types
pub use requests::{ChatRequest, Message};
pub use responses::{ChatResponse, HealthResponse, InfoResponse, ListModelsResponse};
pub use types::Role;
