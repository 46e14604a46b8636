//! Reservation handlers
//!
//! Thin axum wrappers around [`ReservationEndpoint`](crate::reservation::ReservationEndpoint):
//! extract, call, attach the request path to any error.

use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, State},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{ApiError, AtPath, ErrorDetails, JsonBody, PathParam};
use crate::reservation::{GameId, Reservation, ReservationId, ReservationPayload};

/// List all reservations
///
/// GET /reservation
#[utoipa::path(
    get,
    path = "/reservation",
    responses(
        (status = 200, description = "All reservations (possibly empty)", body = Vec<Reservation>),
    ),
    tag = "Reservation"
)]
pub async fn get_reservations(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let rows = state.reservations.list_all().await.at(uri.path())?;
    Ok(Json(rows))
}

/// Get a reservation by ID
///
/// GET /reservation/{id}
#[utoipa::path(
    get,
    path = "/reservation/{id}",
    params(("id" = i64, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation found", body = Reservation),
        (status = 404, description = "Reservation does not exist", body = ErrorDetails),
    ),
    tag = "Reservation"
)]
pub async fn get_reservation_by_id(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    PathParam(id): PathParam<ReservationId>,
) -> Result<Json<Reservation>, ApiError> {
    let row = state.reservations.get_by_id(id).await.at(uri.path())?;
    Ok(Json(row))
}

/// Get all reservations for a game
///
/// GET /reservation/game/{gameId}
#[utoipa::path(
    get,
    path = "/reservation/game/{gameId}",
    params(("gameId" = i64, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Reservations for the game", body = Vec<Reservation>),
        (status = 404, description = "No reservations for the game", body = ErrorDetails),
    ),
    tag = "Reservation"
)]
pub async fn get_reservations_by_game_id(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    PathParam(game_id): PathParam<GameId>,
) -> Result<Json<Vec<Reservation>>, ApiError> {
    let rows = state
        .reservations
        .get_by_game_id(game_id)
        .await
        .at(uri.path())?;
    Ok(Json(rows))
}

/// Create a reservation
///
/// POST /reservation
#[utoipa::path(
    post,
    path = "/reservation",
    request_body = ReservationPayload,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Empty field, invalid email, or already reserved", body = ErrorDetails),
    ),
    tag = "Reservation"
)]
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    JsonBody(payload): JsonBody<ReservationPayload>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let created = state.reservations.create(payload).await.at(uri.path())?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a reservation
///
/// POST /reservation/{id} (PUT is accepted too)
#[utoipa::path(
    post,
    path = "/reservation/{id}",
    params(("id" = i64, Path, description = "Reservation ID")),
    request_body = ReservationPayload,
    responses(
        (status = 202, description = "Reservation updated", body = Reservation),
        (status = 400, description = "Empty field, invalid email, or already reserved", body = ErrorDetails),
        (status = 404, description = "Reservation does not exist", body = ErrorDetails),
    ),
    tag = "Reservation"
)]
pub async fn update_reservation(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    PathParam(id): PathParam<ReservationId>,
    JsonBody(payload): JsonBody<ReservationPayload>,
) -> Result<(StatusCode, Json<Reservation>), ApiError> {
    let updated = state.reservations.update(id, payload).await.at(uri.path())?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

/// Delete a reservation by ID
///
/// DELETE /reservation/{id}
#[utoipa::path(
    delete,
    path = "/reservation/{id}",
    params(("id" = i64, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Confirmation text", body = String, content_type = "text/plain"),
        (status = 404, description = "Reservation does not exist", body = ErrorDetails),
    ),
    tag = "Reservation"
)]
pub async fn delete_reservation_by_id(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    PathParam(id): PathParam<ReservationId>,
) -> Result<String, ApiError> {
    state.reservations.delete_by_id(id).await.at(uri.path())
}

/// Delete all reservations for a game
///
/// DELETE /reservation/delete/{gameId}
#[utoipa::path(
    delete,
    path = "/reservation/delete/{gameId}",
    params(("gameId" = i64, Path, description = "Game ID")),
    responses(
        (status = 200, description = "Confirmation text with the number removed", body = String, content_type = "text/plain"),
        (status = 404, description = "No reservations for the game", body = ErrorDetails),
    ),
    tag = "Reservation"
)]
pub async fn delete_reservations_by_game_id(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    PathParam(game_id): PathParam<GameId>,
) -> Result<String, ApiError> {
    state
        .reservations
        .delete_by_game_id(game_id)
        .await
        .at(uri.path())
}
