use std::sync::Arc;

use service::pets::PetRepository;

/// Shared handler state: the one long-lived storage handle for the process.
#[derive(Clone)]
pub struct StoreState {
    pub pets: Arc<dyn PetRepository>,
}

impl StoreState {
    pub fn new(pets: Arc<dyn PetRepository>) -> Self {
        Self { pets }
    }
}
