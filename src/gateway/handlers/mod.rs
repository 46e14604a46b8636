//! HTTP handlers
//!
//! - [`reservation`]: reservation CRUD under `/reservation`
//! - [`health`]: liveness + store reachability

pub mod health;
pub mod reservation;

// Glob re-exports carry utoipa's generated `__path_*` types along with the handlers
pub use health::*;
pub use reservation::*;
