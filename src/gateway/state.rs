use std::sync::Arc;

use crate::reservation::{ReservationEndpoint, ReservationStore};

/// Gateway application state (shared)
#[derive(Clone)]
pub struct AppState {
    pub reservations: ReservationEndpoint,
}

impl AppState {
    pub fn new(store: Arc<dyn ReservationStore>) -> Self {
        Self {
            reservations: ReservationEndpoint::new(store),
        }
    }

    pub fn store(&self) -> &Arc<dyn ReservationStore> {
        self.reservations.store()
    }
}
