//! Pet storage.
//!
//! Handlers only see `Arc<dyn PetRepository>`; the MongoDB backend is wired in
//! at startup and the in-memory one stands in for it in tests.

pub mod memory;
pub mod mongo;
pub mod repository;

pub use memory::InMemoryPetRepository;
pub use mongo::MongoPetRepository;
pub use repository::PetRepository;
