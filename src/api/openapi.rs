//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::cliente_handler;
use crate::domain::{Cliente, ClientePayload};
use crate::errors::{FailureResponse, NotFoundResponse, ValidationErrorResponse};
use crate::types::ClienteSavedResponse;

/// OpenAPI documentation for the Cliente API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cliente API",
        version = "0.1.0",
        description = "CRUD REST API for customer records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        cliente_handler::list_clientes,
        cliente_handler::get_cliente,
        cliente_handler::create_cliente,
        cliente_handler::update_cliente,
        cliente_handler::delete_cliente,
    ),
    components(
        schemas(
            Cliente,
            ClientePayload,
            ClienteSavedResponse,
            ValidationErrorResponse,
            NotFoundResponse,
            FailureResponse,
        )
    ),
    tags(
        (name = "Clientes", description = "Customer management operations")
    )
)]
pub struct ApiDoc;
