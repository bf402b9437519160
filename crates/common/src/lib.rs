//! Pieces shared by the record store and the gateway binaries.

pub mod env;
pub mod types;
pub mod utils;
