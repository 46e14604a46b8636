//! Game reservation management
//!
//! Validation, the endpoint logic, and the stores behind it.

pub mod endpoint;
pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod validation;

// Re-export commonly used types
pub use endpoint::ReservationEndpoint;
pub use error::{ReservationError, StoreError};
pub use memory::MemoryReservationStore;
pub use models::{GameId, NewReservation, Reservation, ReservationId, ReservationPayload};
pub use repository::{PgReservationStore, ReservationStore};
pub use validation::{RequestKind, ValidationError, email_is_valid};
