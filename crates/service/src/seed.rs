//! Initial data for an empty collection.
//!
//! The count and the insert are separate round trips: two instances starting
//! at the same time against an empty collection can both seed it. That race is
//! accepted for this service.

use tracing::info;

use models::pet::NewPet;

use crate::errors::ServiceError;
use crate::pets::PetRepository;

/// The fixed seed set, in insertion order.
pub fn seed_pets() -> Vec<NewPet> {
    vec![
        NewPet::new("Max", "Dog", 3),
        NewPet::new("Bella", "Cat", 2),
        NewPet::new("Charlie", "Dog", 5),
        NewPet::new("Luna", "Cat", 1),
    ]
}

/// Insert the seed set when the collection is empty. Returns whether it seeded.
pub async fn seed_if_empty(repo: &dyn PetRepository) -> Result<bool, ServiceError> {
    let existing = repo.count().await?;
    if existing > 0 {
        info!(existing, "collection already populated; skipping seed");
        return Ok(false);
    }
    let inserted = repo.insert_many(seed_pets()).await?;
    info!(count = inserted.len(), "database seeded with initial pets");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pets::InMemoryPetRepository;
    use serde_json::json;

    #[tokio::test]
    async fn empty_collection_gets_seed_set_in_order() -> Result<(), anyhow::Error> {
        let repo = InMemoryPetRepository::new();
        assert!(seed_if_empty(&repo).await?);

        let pets = repo.list().await?;
        let got: Vec<_> = pets
            .iter()
            .map(|p| serde_json::to_value(&p.fields).unwrap())
            .collect();
        assert_eq!(
            got,
            vec![
                json!({"name": "Max", "type": "Dog", "age": 3}),
                json!({"name": "Bella", "type": "Cat", "age": 2}),
                json!({"name": "Charlie", "type": "Dog", "age": 5}),
                json!({"name": "Luna", "type": "Cat", "age": 1}),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn populated_collection_is_left_alone() -> Result<(), anyhow::Error> {
        let repo = InMemoryPetRepository::new();
        let only = repo.create(NewPet::new("Rex", "Dog", 4)).await?;
        assert!(!seed_if_empty(&repo).await?);
        assert_eq!(repo.list().await?, vec![only]);
        Ok(())
    }

    #[tokio::test]
    async fn second_start_does_not_reseed() -> Result<(), anyhow::Error> {
        let repo = InMemoryPetRepository::new();
        assert!(seed_if_empty(&repo).await?);
        assert!(!seed_if_empty(&repo).await?);
        assert_eq!(repo.count().await?, 4);
        Ok(())
    }
}
