//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Each variant renders the
//! body shape the front-end expects for that status code.

use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::{MSG_INTERNAL_ERROR, MSG_QUERY_FAILED};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Field-constraint violations, one formatted message per violation
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// Lookup returned nothing
    #[error("{0}")]
    NotFound(String),

    /// Any data-access failure
    #[error("{mensaje}")]
    Persistence {
        mensaje: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// `{errors: [...]}` body for 400 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    #[schema(example = json!(["El campo nombre - no puede estar vacío"]))]
    pub errors: Vec<String>,
}

/// `{mensaje}` body for 404 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct NotFoundResponse {
    #[schema(example = "El cliente ID: 999 no existe")]
    pub mensaje: String,
}

/// `{mensaje, error}` body for 500 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct FailureResponse {
    #[schema(example = "Error al hacer la consulta en la base de datos")]
    pub mensaje: String,
    /// Most specific underlying cause
    pub error: String,
}

impl From<sea_orm::DbErr> for AppError {
    fn from(source: sea_orm::DbErr) -> Self {
        AppError::Persistence {
            mensaje: MSG_QUERY_FAILED.to_string(),
            source,
        }
    }
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation(errors) => {
                tracing::debug!(?errors, "Request rejected by validation");
                (status, Json(ValidationErrorResponse { errors })).into_response()
            }
            AppError::NotFound(mensaje) => (status, Json(NotFoundResponse { mensaje })).into_response(),
            AppError::Persistence { mensaje, source } => {
                tracing::error!("Database error: {:?}", source);
                let body = FailureResponse {
                    mensaje,
                    error: most_specific_cause(&source),
                };
                (status, Json(body)).into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                let body = FailureResponse {
                    mensaje: MSG_INTERNAL_ERROR.to_string(),
                    error: msg,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Walk the `source()` chain and render the innermost error.
pub fn most_specific_cause(err: &(dyn StdError + 'static)) -> String {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current.to_string()
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for attaching an operation-specific message to persistence errors
pub trait ResultExt<T> {
    fn context(self, mensaje: &str) -> AppResult<T>;
}

impl<T> ResultExt<T> for AppResult<T> {
    fn context(self, mensaje: &str) -> AppResult<T> {
        self.map_err(|e| match e {
            AppError::Persistence { source, .. } => AppError::Persistence {
                mensaje: mensaje.to_string(),
                source,
            },
            other => other,
        })
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(errors: Vec<String>) -> Self {
        AppError::Validation(errors)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
