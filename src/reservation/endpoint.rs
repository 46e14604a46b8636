//! Reservation endpoint logic
//!
//! Validates payloads and turns store outcomes into [`ReservationError`]s.
//! HTTP status and body mapping happens in the gateway.

use std::sync::Arc;

use super::error::{ReservationError, StoreError};
use super::models::{GameId, Reservation, ReservationId, ReservationPayload};
use super::repository::ReservationStore;
use super::validation::{RequestKind, validate};

#[derive(Clone)]
pub struct ReservationEndpoint {
    store: Arc<dyn ReservationStore>,
}

impl ReservationEndpoint {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ReservationStore> {
        &self.store
    }

    /// Every reservation. Empty is not an error.
    pub async fn list_all(&self) -> Result<Vec<Reservation>, ReservationError> {
        self.store.list_all().await.map_err(internal)
    }

    pub async fn get_by_id(&self, id: ReservationId) -> Result<Reservation, ReservationError> {
        self.store
            .get_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| ReservationError::reservation_not_found(id))
    }

    /// Reservations for a game; NotFound when there are none
    pub async fn get_by_game_id(
        &self,
        game_id: GameId,
    ) -> Result<Vec<Reservation>, ReservationError> {
        let rows = self.store.get_by_game_id(game_id).await.map_err(internal)?;
        if rows.is_empty() {
            return Err(ReservationError::game_not_found(game_id));
        }
        Ok(rows)
    }

    pub async fn create(
        &self,
        payload: ReservationPayload,
    ) -> Result<Reservation, ReservationError> {
        let reservation = validate(payload, RequestKind::Creation)?;
        let (document_number, game_id) = (reservation.document_number.clone(), reservation.game_id);

        let saved = self
            .store
            .save(reservation)
            .await
            .map_err(|e| remap_duplicate(e, &document_number, game_id))?;

        tracing::info!(id = saved.id, game_id, "Reservation created");
        Ok(saved)
    }

    /// Replace reservation `id` with the payload's fields
    pub async fn update(
        &self,
        id: ReservationId,
        payload: ReservationPayload,
    ) -> Result<Reservation, ReservationError> {
        let reservation = validate(payload, RequestKind::Update)?;
        let (document_number, game_id) = (reservation.document_number.clone(), reservation.game_id);

        let updated = self
            .store
            .update_by_id(id, reservation)
            .await
            .map_err(|e| remap_duplicate(e, &document_number, game_id))?
            .ok_or_else(|| ReservationError::reservation_not_found(id))?;

        tracing::info!(id, game_id, "Reservation updated");
        Ok(updated)
    }

    /// Returns the confirmation text
    pub async fn delete_by_id(&self, id: ReservationId) -> Result<String, ReservationError> {
        if !self.store.delete_by_id(id).await.map_err(internal)? {
            return Err(ReservationError::reservation_not_found(id));
        }
        tracing::info!(id, "Reservation deleted");
        Ok(format!("Reservation {} has been eliminated", id))
    }

    /// Returns the confirmation text with the number removed
    pub async fn delete_by_game_id(&self, game_id: GameId) -> Result<String, ReservationError> {
        let eliminated = self.store.delete_by_game_id(game_id).await.map_err(internal)?;
        if eliminated == 0 {
            return Err(ReservationError::game_not_found(game_id));
        }
        tracing::info!(game_id, eliminated, "Reservations deleted for game");
        Ok(format!(
            "{} reservations for game {} have been eliminated",
            eliminated, game_id
        ))
    }
}

fn internal(e: StoreError) -> ReservationError {
    tracing::error!("Reservation store failure: {}", e);
    ReservationError::Internal(e)
}

fn remap_duplicate(e: StoreError, document_number: &str, game_id: GameId) -> ReservationError {
    match e {
        StoreError::Duplicate => ReservationError::already_reserved(document_number, game_id),
        other => internal(other),
    }
}
