use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid connection target: {0}")]
    Target(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<mongodb::error::Error> for ModelError {
    fn from(e: mongodb::error::Error) -> Self {
        Self::Db(e.to_string())
    }
}
