use axum::{
    extract::State,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use log::{error, info};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chatgate_engine::{ChatMessage, Completion, CompletionEngine, ModelCatalog};
use chatgate_models::{
    ChatRequest, ChatResponse, HealthResponse, InfoResponse, ListModelsResponse, Role,
};

use crate::web::error::ApiError;
use crate::SERVICE_NAME;

/// Deadline for one completion call
pub const ENGINE_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn CompletionEngine>,
    pub catalog: Arc<ModelCatalog>,
    pub engine_timeout: Duration,
}

impl AppState {
    /// Build state for an engine, snapshotting its model list into the
    /// catalog.
    pub fn new(engine: Arc<dyn CompletionEngine>) -> anyhow::Result<Self> {
        let catalog = Arc::new(ModelCatalog::from_engine(engine.as_ref())?);
        Ok(Self {
            engine,
            catalog,
            engine_timeout: ENGINE_TIMEOUT,
        })
    }

    /// Override the completion deadline (tests exercise the 504 path
    /// with a short one)
    pub fn with_engine_timeout(mut self, timeout: Duration) -> Self {
        self.engine_timeout = timeout;
        self
    }
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/models", get(list_models))
        .route("/api/info", get(info_handler))
        .route("/api/chat", post(chat))
        .route("/docs", get(serve_docs))
        .route("/redoc", get(serve_redoc))
        .with_state(state)
}

/// GET / - Service health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "go to /docs or /api/info for more details <3".to_string(),
    })
}

/// GET /api/models - Enumerate the engine's public model identifiers
async fn list_models(State(state): State<AppState>) -> Result<Json<ListModelsResponse>, ApiError> {
    let models = state.engine.models().map_err(|err| {
        error!("model enumeration failed: {err:#}");
        ApiError::Internal("Could not retrieve models".to_string())
    })?;
    Ok(Json(ListModelsResponse { models }))
}

/// GET /api/info - Static service metadata
async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    let endpoints: BTreeMap<String, String> = [
        ("chat", "/api/chat (POST)"),
        ("models", "/api/models (GET)"),
        ("info", "/api/info (GET)"),
        ("docs", "/docs"),
        ("health", "/"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Json(InfoResponse {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        engine_version: state.engine.version(),
        endpoints,
    })
}

/// POST /api/chat - Validate, resolve the model, run one bounded
/// completion, and map failures to their status codes
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    info!("chat request | model: {}", request.model);

    // Roles are checked before anything touches the engine
    let mut messages = Vec::with_capacity(request.history.len() + 1);
    for msg in &request.history {
        let role = Role::parse(&msg.role).ok_or_else(|| {
            ApiError::InvalidRequest(
                "Invalid role. Only 'user' and 'assistant' are allowed.".to_string(),
            )
        })?;
        messages.push(ChatMessage::new(role, msg.content.clone()));
    }
    messages.push(ChatMessage::new(Role::User, request.message.clone()));

    let model = state.catalog.resolve(&request.model).ok_or_else(|| {
        ApiError::InvalidRequest(format!(
            "Model '{}' not found. Available: {}",
            request.model,
            state.catalog.models().join(", ")
        ))
    })?;

    let result = tokio::time::timeout(state.engine_timeout, state.engine.create(&model, &messages))
        .await
        .map_err(|_| ApiError::GatewayTimeout("AI response timed out".to_string()))?;

    let completion = result.map_err(map_engine_error)?;

    let response = completion.text.trim().to_string();
    if response.is_empty() {
        return Err(ApiError::BadGateway("Empty response from AI".to_string()));
    }

    let provider = provider_name(&completion);
    info!(
        "AI responded | provider: {}, length: {}",
        provider,
        response.len()
    );

    Ok(Json(ChatResponse {
        response,
        model: model.display_name(),
        provider,
    }))
}

/// Call-scoped provider attribution; "Unknown" when the engine could
/// not say which backend serviced the call.
fn provider_name(completion: &Completion) -> String {
    completion
        .provider
        .clone()
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Translate an engine failure into its status code. Upstream blocking
/// is detected by a substring match on the error chain.
fn map_engine_error(err: anyhow::Error) -> ApiError {
    error!("AI error: {err:#}");
    if format!("{err:#}").contains("Cloudflare") {
        ApiError::ServiceUnavailable("AI service is temporarily blocked".to_string())
    } else {
        ApiError::Internal("AI processing failed".to_string())
    }
}

/// GET /docs - Endpoint summary page
async fn serve_docs() -> Html<&'static str> {
    Html(include_str!("../../web/docs.html"))
}

/// GET /redoc - Alternate docs page
async fn serve_redoc() -> Html<&'static str> {
    Html(include_str!("../../web/redoc.html"))
}
