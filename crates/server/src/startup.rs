use std::sync::Arc;

use common::utils::logging::init_logging_default;
use configs::StoreConfig;
use dotenvy::dotenv;
use mongodb::Client;
use tracing::{error, info};

use service::pets::{MongoPetRepository, PetRepository};
use service::seed::seed_if_empty;

use crate::routes;
use crate::state::StoreState;

/// Confirm the database answers, then seed it if the collection is empty.
///
/// Runs beside the HTTP listener; while the database is down requests fail
/// with 500 and this task logs the connection error once.
pub async fn connect_and_seed(client: Client, database: String, pets: Arc<dyn PetRepository>) {
    if let Err(e) = models::db::ping(&client, &database).await {
        error!(error = %e, %database, "MongoDB connection error");
        return;
    }
    info!(%database, "Connected to MongoDB");
    if let Err(e) = seed_if_empty(pets.as_ref()).await {
        error!(error = %e, "seeding failed");
    }
}

/// Open the database handle described by `cfg`; connection happens lazily.
pub async fn open_store(cfg: &StoreConfig) -> anyhow::Result<(Client, Arc<dyn PetRepository>)> {
    info!(target_url = %cfg.redacted_mongo_url(), "Connecting to MongoDB...");
    let client = models::db::connect(&cfg.mongo_url()).await?;
    let collection = models::db::pets_collection(&client, &cfg.mongo_database);
    let pets: Arc<dyn PetRepository> = Arc::new(MongoPetRepository::new(collection));
    Ok((client, pets))
}

/// Public entry: connect, seed in the background, serve the API.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = StoreConfig::load()?;
    let (client, pets) = open_store(&cfg).await?;
    tokio::spawn(connect_and_seed(
        client,
        cfg.mongo_database.clone(),
        Arc::clone(&pets),
    ));

    let app = routes::build_router(StoreState::new(pets));

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Server running on port {}", cfg.port);
    axum::serve(listener, app).await?;
    Ok(())
}
