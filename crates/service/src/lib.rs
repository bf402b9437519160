//! Service layer for the record store.
//! - `pets` holds the storage seam (`PetRepository`) and its backends.
//! - `seed` fills an empty collection with the initial pets.

pub mod errors;
pub mod pets;
pub mod seed;
