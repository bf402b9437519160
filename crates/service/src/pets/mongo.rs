use async_trait::async_trait;
use mongodb::{bson::doc, Collection};
use tracing::debug;

use models::pet::{NewPet, Pet, PetDocument};

use super::repository::PetRepository;
use crate::errors::ServiceError;

/// MongoDB-backed repository over the `pets` collection.
#[derive(Clone)]
pub struct MongoPetRepository {
    collection: Collection<PetDocument>,
}

impl MongoPetRepository {
    pub fn new(collection: Collection<PetDocument>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl PetRepository for MongoPetRepository {
    async fn list(&self) -> Result<Vec<Pet>, ServiceError> {
        let mut cursor = self.collection.find(doc! {}).await?;
        let mut pets = Vec::new();
        while cursor.advance().await? {
            let doc = cursor.deserialize_current()?;
            pets.push(Pet::from(doc));
        }
        debug!(count = pets.len(), "listed pets");
        Ok(pets)
    }

    async fn create(&self, pet: NewPet) -> Result<Pet, ServiceError> {
        let doc = pet.into_document();
        self.collection.insert_one(&doc).await?;
        debug!(id = %doc.id, "inserted pet");
        Ok(Pet::from(doc))
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    async fn insert_many(&self, pets: Vec<NewPet>) -> Result<Vec<Pet>, ServiceError> {
        if pets.is_empty() {
            return Ok(Vec::new());
        }
        let docs: Vec<PetDocument> = pets.into_iter().map(NewPet::into_document).collect();
        self.collection.insert_many(&docs).await?;
        Ok(docs.into_iter().map(Pet::from).collect())
    }
}
