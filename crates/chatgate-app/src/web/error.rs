use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Gateway error taxonomy. Every variant renders as a JSON body with a
/// `detail` string; engine internals never leak to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 - bad role in history, unresolvable model name
    #[error("{0}")]
    InvalidRequest(String),

    /// 500 - model enumeration failure, uncategorized engine failure
    #[error("{0}")]
    Internal(String),

    /// 502 - engine returned an empty response
    #[error("{0}")]
    BadGateway(String),

    /// 503 - engine failure attributable to upstream blocking
    #[error("{0}")]
    ServiceUnavailable(String),

    /// 504 - engine call exceeded the deadline
    #[error("{0}")]
    GatewayTimeout(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
