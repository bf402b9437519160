use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use tracing::error;

/// Storage failure inside a handler: logged, answered with a bare 500.
#[derive(Debug)]
pub struct StoreError(pub ServiceError);

impl From<ServiceError> for StoreError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed against the database");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
