use axum::{http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Cliente;

/// `{mensaje, cliente}` body returned after a successful create or update
#[derive(Debug, Serialize, ToSchema)]
pub struct ClienteSavedResponse {
    #[schema(example = "El cliente fue creado correctamente")]
    pub mensaje: String,
    pub cliente: Cliente,
}

impl ClienteSavedResponse {
    pub fn new(mensaje: impl Into<String>, cliente: Cliente) -> Self {
        Self {
            mensaje: mensaje.into(),
            cliente,
        }
    }
}

/// No content response helper for DELETE endpoints
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
