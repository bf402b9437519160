use common::{env::ensure_static_dir, utils::logging::init_logging_json};
use configs::GatewayConfig;
use dotenvy::dotenv;
use tracing::info;

use crate::routes;
use crate::upstream::RecordStoreClient;

/// Public entry: proxy `/api/pets` to the record store and serve static assets.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_json();

    let cfg = GatewayConfig::load()?;
    ensure_static_dir(&cfg.static_dir).await;

    let client = RecordStoreClient::new(cfg.pets_url());
    info!(backend = %cfg.backend_url, static_dir = %cfg.static_dir, "gateway configured");

    let app = routes::build_router(client, &cfg.static_dir);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Frontend running on port {}", cfg.port);
    axum::serve(listener, app).await?;
    Ok(())
}
