use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Request, State,
    },
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::state::AppState;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Serialization(_) | Self::Internal(_) | Self::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

/// The client-facing message of an error response, kept so middleware can
/// rebuild the body without the details.
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                "Database error occurred"
            }
            Self::Serialization(ref e) => {
                tracing::error!("Serialization error: {}", e);
                "Data processing error"
            }
            Self::Validation(ref msg) => msg.as_str(),
            Self::InvalidId(_) => "Invalid id format",
            Self::NotFound(ref msg) => msg.as_str(),
            Self::Conflict(ref msg) => msg.as_str(),
            Self::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error"
            }
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {:?}", e);
                "An unexpected error occurred"
            }
        };

        let body = Json(json!({
            "error": error_message,
            "details": self.to_string(),
        }));

        let mut response = (status, body).into_response();
        response
            .extensions_mut()
            .insert(ErrorMessage(error_message.to_string()));
        response
    }
}

/// Drops `details` from 5xx error bodies in production.
pub async fn redact_server_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if !state.config.environment.is_production() || !response.status().is_server_error() {
        return response;
    }

    match response.extensions().get::<ErrorMessage>() {
        Some(ErrorMessage(message)) => {
            (response.status(), Json(json!({ "error": message }))).into_response()
        }
        None => response,
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
