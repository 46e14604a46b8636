use thiserror::Error;

use super::validation::ValidationError;

/// Failures reported by a [`ReservationStore`](super::ReservationStore)
#[derive(Error, Debug)]
pub enum StoreError {
    /// The `(game_id, document_number)` uniqueness constraint rejected a write
    #[error("Reservation already exists for this game and document number")]
    Duplicate,

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Duplicate,
            _ => StoreError::Database(e),
        }
    }
}

/// Per-request outcome of a reservation operation
#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[source] StoreError),
}

impl ReservationError {
    pub fn reservation_not_found(id: i64) -> Self {
        ReservationError::NotFound(format!("Reservation {} does not exist", id))
    }

    pub fn game_not_found(game_id: i64) -> Self {
        ReservationError::NotFound(format!("There is no reservations for game {}", game_id))
    }

    pub fn already_reserved(document_number: &str, game_id: i64) -> Self {
        ReservationError::BadRequest(format!(
            "User {} has already reserved game {}",
            document_number, game_id
        ))
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            ReservationError::NotFound(_) => 404,
            ReservationError::BadRequest(_) => 400,
            ReservationError::Internal(_) => 500,
        }
    }
}

impl From<ValidationError> for ReservationError {
    fn from(e: ValidationError) -> Self {
        ReservationError::BadRequest(e.to_string())
    }
}
