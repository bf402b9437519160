use mongodb::{bson::doc, Client, Collection};
use tracing::debug;

use crate::errors::ModelError;
use crate::pet::PetDocument;

/// Collection holding pet documents.
pub const PETS_COLLECTION: &str = "pets";

/// Build a client from a `mongodb://` connection string.
///
/// The driver connects lazily, so this only fails on a malformed target;
/// use [`ping`] to confirm the server is reachable.
pub async fn connect(url: &str) -> Result<Client, ModelError> {
    Client::with_uri_str(url)
        .await
        .map_err(|e| ModelError::Target(e.to_string()))
}

/// Round-trip a `ping` command against `database`.
pub async fn ping(client: &Client, database: &str) -> Result<(), ModelError> {
    client.database(database).run_command(doc! { "ping": 1 }).await?;
    debug!(%database, "ping ok");
    Ok(())
}

pub fn pets_collection(client: &Client, database: &str) -> Collection<PetDocument> {
    client.database(database).collection::<PetDocument>(PETS_COLLECTION)
}
