//! Environment/runtime helpers
//!
//! Sanity checks run once at startup.

use tracing::{info, warn};

/// Warn when the static assets directory is missing; the gateway still starts
/// and only the API routes keep working.
pub async fn ensure_static_dir(static_dir: &str) -> bool {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => {
            info!(%static_dir, "serving static assets");
            true
        }
        Ok(_) => {
            warn!(%static_dir, "static assets path is not a directory; static assets will 404");
            false
        }
        Err(_) => {
            warn!(%static_dir, "static assets directory not found; static assets will 404");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_static_dir_is_reported() {
        assert!(!ensure_static_dir("/nonexistent-static-dir-for-tests").await);
        let tmp = std::env::temp_dir();
        assert!(ensure_static_dir(tmp.to_str().expect("utf8 temp dir")).await);
    }
}
