pub mod bootstrap;
pub mod errors;
pub mod routes;
pub mod upstream;

pub use bootstrap::run;
