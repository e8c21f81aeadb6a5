// Web layer - router, handlers, error mapping
pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use routes::AppState;
pub use server::WebServer;
