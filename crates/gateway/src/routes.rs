use std::path::Path;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer},
};
use tracing::{error, Level};

use crate::errors::{ProxyError, ADD_PET_FAILED, FETCH_PETS_FAILED};
use crate::upstream::RecordStoreClient;

fn json_response(body: axum::body::Bytes) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

pub async fn list_pets(State(client): State<RecordStoreClient>) -> Result<Response, ProxyError> {
    match client.fetch_pets().await {
        Ok(body) => Ok(json_response(body)),
        Err(e) => {
            error!(error = %e, upstream = %client.pets_url(), "Error fetching pets");
            Err(ProxyError(FETCH_PETS_FAILED))
        }
    }
}

pub async fn create_pet(
    State(client): State<RecordStoreClient>,
    Json(pet): Json<serde_json::Value>,
) -> Result<Response, ProxyError> {
    match client.add_pet(&pet).await {
        Ok(body) => Ok(json_response(body)),
        Err(e) => {
            error!(error = %e, upstream = %client.pets_url(), "Error adding pet");
            Err(ProxyError(ADD_PET_FAILED))
        }
    }
}

/// Build the gateway router: proxied `/api/pets`, static assets for every other path.
pub fn build_router(client: RecordStoreClient, static_dir: &str) -> Router {
    let index = Path::new(static_dir).join("index.html");
    let assets = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/pets", get(list_pets).post(create_pet))
        .with_state(client)
        .fallback_service(assets)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
