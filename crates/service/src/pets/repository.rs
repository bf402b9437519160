use async_trait::async_trait;
use models::pet::{NewPet, Pet};

use crate::errors::ServiceError;

#[async_trait]
pub trait PetRepository: Send + Sync {
    /// All pets in the store's natural retrieval order.
    async fn list(&self) -> Result<Vec<Pet>, ServiceError>;
    /// Persist one pet and return it with its assigned identifier.
    async fn create(&self, pet: NewPet) -> Result<Pet, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    /// Persist several pets, preserving the given order.
    async fn insert_many(&self, pets: Vec<NewPet>) -> Result<Vec<Pet>, ServiceError>;
}
