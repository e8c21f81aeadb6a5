// Completion engine abstraction and the backends that implement it
pub mod catalog;
pub mod client;

pub use catalog::{ModelCatalog, ResolvedModel};
pub use client::auto::AutoEngine;
pub use client::openai_compat::OpenAiCompatBackend;
pub use client::{ChatMessage, Completion, CompletionEngine};
