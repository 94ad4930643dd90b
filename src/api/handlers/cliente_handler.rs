//! Cliente handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::Utc;

use crate::api::extractors::JsonBody;
use crate::api::AppState;
use crate::config::{
    cliente_not_found, MSG_CLIENTE_CREATED, MSG_CLIENTE_UPDATED, MSG_INSERT_FAILED,
    MSG_UPDATE_FAILED,
};
use crate::domain::{Cliente, ClientePayload};
use crate::errors::{AppError, AppResult, ResultExt};
use crate::types::{ClienteSavedResponse, NoContent};

/// Create cliente routes (mounted under `/api`)
pub fn cliente_routes() -> Router<AppState> {
    Router::new()
        .route("/clientes", get(list_clientes).post(create_cliente))
        .route(
            "/clientes/:id",
            get(get_cliente).put(update_cliente).delete(delete_cliente),
        )
}

/// List all clientes
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "All stored clientes", body = Vec<Cliente>),
        (status = 500, description = "Database error", body = crate::errors::FailureResponse)
    )
)]
pub async fn list_clientes(State(state): State<AppState>) -> AppResult<Json<Vec<Cliente>>> {
    let clientes = state.cliente_service.find_all().await?;
    Ok(Json(clientes))
}

/// Get cliente by ID
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(
        ("id" = i64, Path, description = "Cliente ID")
    ),
    responses(
        (status = 200, description = "Cliente found", body = Cliente),
        (status = 404, description = "Cliente not found", body = crate::errors::NotFoundResponse),
        (status = 500, description = "Database error", body = crate::errors::FailureResponse)
    )
)]
pub async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Cliente>> {
    let cliente = state
        .cliente_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(cliente_not_found(id)))?;

    Ok(Json(cliente))
}

/// Create a cliente
///
/// `id` and `createAt` are always assigned by the server.
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = ClientePayload,
    responses(
        (status = 200, description = "Cliente created", body = ClienteSavedResponse),
        (status = 400, description = "Validation error", body = crate::errors::ValidationErrorResponse),
        (status = 500, description = "Database error", body = crate::errors::FailureResponse)
    )
)]
pub async fn create_cliente(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ClientePayload>,
) -> AppResult<Json<ClienteSavedResponse>> {
    let payload = payload.normalized();
    payload.check()?;

    let cliente = Cliente::from_payload(payload, Utc::now())?;
    let saved = state
        .cliente_service
        .save(cliente)
        .await
        .context(MSG_INSERT_FAILED)?;

    tracing::info!(id = ?saved.id, "Cliente created");
    Ok(Json(ClienteSavedResponse::new(MSG_CLIENTE_CREATED, saved)))
}

/// Update a cliente's nombre, apellido and email
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(
        ("id" = i64, Path, description = "Cliente ID")
    ),
    request_body = ClientePayload,
    responses(
        (status = 200, description = "Cliente updated", body = ClienteSavedResponse),
        (status = 400, description = "Validation error", body = crate::errors::ValidationErrorResponse),
        (status = 404, description = "Cliente not found", body = crate::errors::NotFoundResponse),
        (status = 500, description = "Database error", body = crate::errors::FailureResponse)
    )
)]
pub async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<ClientePayload>,
) -> AppResult<Json<ClienteSavedResponse>> {
    // Existence is checked before the payload is validated
    let mut actual = state
        .cliente_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(cliente_not_found(id)))?;

    let payload = payload.normalized();
    payload.check()?;
    actual.apply(payload)?;

    let saved = state
        .cliente_service
        .save(actual)
        .await
        .context(MSG_UPDATE_FAILED)?;

    tracing::info!(id, "Cliente updated");
    Ok(Json(ClienteSavedResponse::new(MSG_CLIENTE_UPDATED, saved)))
}

/// Delete a cliente
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(
        ("id" = i64, Path, description = "Cliente ID")
    ),
    responses(
        (status = 204, description = "Deleted, or never existed"),
        (status = 500, description = "Database error", body = crate::errors::FailureResponse)
    )
)]
pub async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.cliente_service.delete(id).await?;
    Ok(NoContent)
}
