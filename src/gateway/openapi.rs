//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::ErrorDetails;
use crate::reservation::{Reservation, ReservationPayload};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Games Store Reservation API",
        version = "0.1.0",
        description = "Create, read, update and delete game reservations.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::get_reservations,
        crate::gateway::handlers::get_reservation_by_id,
        crate::gateway::handlers::get_reservations_by_game_id,
        crate::gateway::handlers::create_reservation,
        crate::gateway::handlers::update_reservation,
        crate::gateway::handlers::delete_reservation_by_id,
        crate::gateway::handlers::delete_reservations_by_game_id,
    ),
    components(
        schemas(
            HealthResponse,
            Reservation,
            ReservationPayload,
            ErrorDetails,
        )
    ),
    tags(
        (name = "System", description = "Health and service status"),
        (name = "Reservation", description = "Game reservations"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document with the build's git hash appended to the version
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.version = format!("{}+{}", doc.info.version, env!("GIT_HASH"));
    doc
}
