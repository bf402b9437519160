use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::pet::{NewPet, Pet};

use super::repository::PetRepository;
use crate::errors::ServiceError;

/// Process-local repository keeping pets in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryPetRepository {
    inner: Arc<RwLock<Vec<Pet>>>,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PetRepository for InMemoryPetRepository {
    async fn list(&self) -> Result<Vec<Pet>, ServiceError> {
        Ok(self.inner.read().await.clone())
    }

    async fn create(&self, pet: NewPet) -> Result<Pet, ServiceError> {
        let pet = Pet::from(pet.into_document());
        self.inner.write().await.push(pet.clone());
        Ok(pet)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.inner.read().await.len() as u64)
    }

    async fn insert_many(&self, pets: Vec<NewPet>) -> Result<Vec<Pet>, ServiceError> {
        let created: Vec<Pet> = pets
            .into_iter()
            .map(|p| Pet::from(p.into_document()))
            .collect();
        self.inner.write().await.extend(created.iter().cloned());
        Ok(created)
    }
}
