//! HTTP client for the record store's `/api/pets` collection.
//!
//! Responses are checked to be JSON and then handed back as the original
//! bytes, so the gateway relays exactly what the record store sent.

use axum::body::Bytes;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::errors::UpstreamError;

#[derive(Clone)]
pub struct RecordStoreClient {
    http: reqwest::Client,
    pets_url: String,
}

impl RecordStoreClient {
    pub fn new(pets_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), pets_url)
    }

    pub fn with_client(http: reqwest::Client, pets_url: impl Into<String>) -> Self {
        Self { http, pets_url: pets_url.into() }
    }

    pub fn pets_url(&self) -> &str {
        &self.pets_url
    }

    pub async fn fetch_pets(&self) -> Result<Bytes, UpstreamError> {
        let resp = self
            .http
            .get(&self.pets_url)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;
        debug!(status = %resp.status(), url = %self.pets_url, "record store answered list");
        json_body(resp).await
    }

    pub async fn add_pet(&self, pet: &serde_json::Value) -> Result<Bytes, UpstreamError> {
        let resp = self
            .http
            .post(&self.pets_url)
            .json(pet)
            .send()
            .await
            .map_err(|e| UpstreamError::Network(e.to_string()))?;
        debug!(status = %resp.status(), url = %self.pets_url, "record store answered create");
        json_body(resp).await
    }
}

async fn json_body(resp: reqwest::Response) -> Result<Bytes, UpstreamError> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| UpstreamError::Network(e.to_string()))?;
    serde_json::from_slice::<IgnoredAny>(&bytes).map_err(|e| UpstreamError::Parse(e.to_string()))?;
    Ok(bytes)
}
