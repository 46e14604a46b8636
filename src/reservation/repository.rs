//! Reservation persistence
//!
//! [`ReservationStore`] is the seam between the endpoint and storage.
//! [`PgReservationStore`] is the durable implementation; it uses runtime
//! queries so no database is needed at compile time.

use async_trait::async_trait;
use std::sync::Arc;

use super::error::StoreError;
use super::models::{GameId, NewReservation, Reservation, ReservationId};
use crate::db::Database;

/// CRUD storage for reservations.
///
/// Implementations must enforce `(game_id, document_number)` uniqueness and
/// report violations as [`StoreError::Duplicate`]. IDs are assigned here.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// All reservations, ordered by id
    async fn list_all(&self) -> Result<Vec<Reservation>, StoreError>;

    async fn get_by_id(&self, id: ReservationId) -> Result<Option<Reservation>, StoreError>;

    /// Reservations for a game, ordered by id
    async fn get_by_game_id(&self, game_id: GameId) -> Result<Vec<Reservation>, StoreError>;

    /// Insert a reservation and return it with its assigned id
    async fn save(&self, reservation: NewReservation) -> Result<Reservation, StoreError>;

    /// Replace every field of reservation `id`.
    ///
    /// Returns `None` if no such reservation exists.
    async fn update_by_id(
        &self,
        id: ReservationId,
        reservation: NewReservation,
    ) -> Result<Option<Reservation>, StoreError>;

    /// Returns `true` if a reservation was removed
    async fn delete_by_id(&self, id: ReservationId) -> Result<bool, StoreError>;

    /// Returns the number of reservations removed
    async fn delete_by_game_id(&self, game_id: GameId) -> Result<u64, StoreError>;

    /// Check the backend is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}

/// PostgreSQL-backed reservation store
pub struct PgReservationStore {
    db: Arc<Database>,
}

impl PgReservationStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, StoreError> {
        let rows: Vec<Reservation> = sqlx::query_as(
            r#"SELECT id, game_id, document_number, name, last_name, email
               FROM reservations ORDER BY id"#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: ReservationId) -> Result<Option<Reservation>, StoreError> {
        let row: Option<Reservation> = sqlx::query_as(
            r#"SELECT id, game_id, document_number, name, last_name, email
               FROM reservations WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row)
    }

    async fn get_by_game_id(&self, game_id: GameId) -> Result<Vec<Reservation>, StoreError> {
        let rows: Vec<Reservation> = sqlx::query_as(
            r#"SELECT id, game_id, document_number, name, last_name, email
               FROM reservations WHERE game_id = $1 ORDER BY id"#,
        )
        .bind(game_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows)
    }

    async fn save(&self, reservation: NewReservation) -> Result<Reservation, StoreError> {
        let row: Reservation = sqlx::query_as(
            r#"INSERT INTO reservations (game_id, document_number, name, last_name, email)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id, game_id, document_number, name, last_name, email"#,
        )
        .bind(reservation.game_id)
        .bind(&reservation.document_number)
        .bind(&reservation.name)
        .bind(&reservation.last_name)
        .bind(&reservation.email)
        .fetch_one(self.db.pool())
        .await?;

        Ok(row)
    }

    async fn update_by_id(
        &self,
        id: ReservationId,
        reservation: NewReservation,
    ) -> Result<Option<Reservation>, StoreError> {
        let row: Option<Reservation> = sqlx::query_as(
            r#"UPDATE reservations
               SET game_id = $2, document_number = $3, name = $4, last_name = $5, email = $6
               WHERE id = $1
               RETURNING id, game_id, document_number, name, last_name, email"#,
        )
        .bind(id)
        .bind(reservation.game_id)
        .bind(&reservation.document_number)
        .bind(&reservation.name)
        .bind(&reservation.last_name)
        .bind(&reservation.email)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row)
    }

    async fn delete_by_id(&self, id: ReservationId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_game_id(&self, game_id: GameId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM reservations WHERE game_id = $1")
            .bind(game_id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.health_check().await?;
        Ok(())
    }
}
