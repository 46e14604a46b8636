//! Data models for game reservations

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Store-assigned reservation ID
pub type ReservationId = i64;

/// Game ID (no referential check against a catalog)
pub type GameId = i64;

/// A person's reservation of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[schema(example = 1)]
    pub id: ReservationId,
    #[schema(example = 1)]
    pub game_id: GameId,
    #[schema(example = "0001")]
    pub document_number: String,
    #[schema(example = "Juan")]
    pub name: String,
    #[schema(example = "Perez")]
    pub last_name: String,
    #[schema(example = "mail1@mail.com")]
    pub email: String,
}

/// Reservation request body as received on the wire.
///
/// Every field is optional: absent and `null` both count as missing. A missing
/// `gameId` reads as `0`. The `id` is accepted but never trusted.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    #[serde(default)]
    pub id: Option<ReservationId>,
    #[serde(default)]
    #[schema(example = 1)]
    pub game_id: Option<GameId>,
    #[serde(default)]
    #[schema(example = "0001")]
    pub document_number: Option<String>,
    #[serde(default)]
    #[schema(example = "Juan")]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(example = "Perez")]
    pub last_name: Option<String>,
    #[serde(default)]
    #[schema(example = "mail1@mail.com")]
    pub email: Option<String>,
}

impl ReservationPayload {
    pub fn game_id(&self) -> GameId {
        self.game_id.unwrap_or(0)
    }
}

/// Validated reservation fields, ready to hand to a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub game_id: GameId,
    pub document_number: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
}

impl NewReservation {
    pub fn with_id(self, id: ReservationId) -> Reservation {
        Reservation {
            id,
            game_id: self.game_id,
            document_number: self.document_number,
            name: self.name,
            last_name: self.last_name,
            email: self.email,
        }
    }
}
