// Chat gateway application - HTTP surface over the completion engine
pub mod cli;
pub mod web;

pub use cli::Cli;
pub use web::routes::AppState;
pub use web::server::{WebServer, WebServerConfig};

/// Service name reported by / and /api/info
pub const SERVICE_NAME: &str = "AI Chat Service";
