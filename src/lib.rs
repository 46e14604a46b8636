//! Games Store - Reservation Service
//!
//! CRUD REST endpoint for game reservations backed by PostgreSQL.
//!
//! # Modules
//!
//! - [`reservation`] - Models, validation, endpoint logic, stores
//! - [`gateway`] - HTTP routes, handlers, error bodies, OpenAPI
//! - [`db`] - PostgreSQL pool and schema
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod reservation;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use gateway::state::AppState;
pub use reservation::{
    MemoryReservationStore, PgReservationStore, Reservation, ReservationEndpoint,
    ReservationError, ReservationPayload, ReservationStore, StoreError,
};
