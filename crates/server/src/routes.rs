use axum::{extract::State, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use models::pet::{NewPet, Pet};

use crate::errors::StoreError;
use crate::state::StoreState;

pub async fn list_pets(State(state): State<StoreState>) -> Result<Json<Vec<Pet>>, StoreError> {
    let pets = state.pets.list().await?;
    Ok(Json(pets))
}

pub async fn create_pet(
    State(state): State<StoreState>,
    Json(input): Json<NewPet>,
) -> Result<Json<Pet>, StoreError> {
    let pet = state.pets.create(input).await?;
    info!(id = %pet.id, name = ?pet.fields.name, "created pet");
    Ok(Json(pet))
}

/// Any origin, any method, any header.
pub fn build_cors() -> CorsLayer {
    CorsLayer::permissive()
}

/// Build the record store router: `/api/pets` list and create.
pub fn build_router(state: StoreState) -> Router {
    Router::new()
        .route("/api/pets", get(list_pets).post(create_pet))
        .with_state(state)
        .layer(build_cors())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
