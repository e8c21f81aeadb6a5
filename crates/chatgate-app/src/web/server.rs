use anyhow::Result;
use axum::Router;
use log::info;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use crate::web::routes::{self, AppState};

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub state: AppState,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
}

impl WebServer {
    pub fn new(config: WebServerConfig) -> Self {
        Self { config }
    }

    /// Build the router with its middleware stack
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.config.state.clone()).layer(cors)
    }

    /// Start the web server
    pub async fn start(self) -> Result<()> {
        let app = self.router();

        info!("gateway listening on http://{}", self.config.bind_addr);
        info!("chat endpoint: POST http://{}/api/chat", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
