//! In-process reservation store
//!
//! Same contract as the PostgreSQL store, uniqueness included. Used when no
//! database is configured, and by tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::error::StoreError;
use super::models::{GameId, NewReservation, Reservation, ReservationId};
use super::repository::ReservationStore;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<ReservationId, Reservation>,
    last_id: ReservationId,
}

impl Inner {
    fn conflicts(&self, r: &NewReservation, except: Option<ReservationId>) -> bool {
        self.rows.values().any(|row| {
            Some(row.id) != except
                && row.game_id == r.game_id
                && row.document_number == r.document_number
        })
    }
}

#[derive(Default)]
pub struct MemoryReservationStore {
    inner: RwLock<Inner>,
}

impl MemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ReservationId) -> Result<Option<Reservation>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn get_by_game_id(&self, game_id: GameId) -> Result<Vec<Reservation>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .rows
            .values()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect())
    }

    async fn save(&self, reservation: NewReservation) -> Result<Reservation, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.conflicts(&reservation, None) {
            return Err(StoreError::Duplicate);
        }
        inner.last_id += 1;
        let row = reservation.with_id(inner.last_id);
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_by_id(
        &self,
        id: ReservationId,
        reservation: NewReservation,
    ) -> Result<Option<Reservation>, StoreError> {
        let mut inner = self.inner.write().await;
        if !inner.rows.contains_key(&id) {
            return Ok(None);
        }
        if inner.conflicts(&reservation, Some(id)) {
            return Err(StoreError::Duplicate);
        }
        let row = reservation.with_id(id);
        inner.rows.insert(id, row.clone());
        Ok(Some(row))
    }

    async fn delete_by_id(&self, id: ReservationId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn delete_by_game_id(&self, game_id: GameId) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.rows.len();
        inner.rows.retain(|_, r| r.game_id != game_id);
        Ok((before - inner.rows.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
