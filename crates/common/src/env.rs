//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the listener is bound.

use tracing::warn;

/// Warn when the static asset directory is missing. Requests for static
/// files will then fall through to 404; the service still starts.
///
/// Returns whether the directory exists.
pub async fn ensure_public_dir(public_dir: &str) -> bool {
    match tokio::fs::metadata(public_dir).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%public_dir, "public path is not a directory; static assets will 404");
            false
        }
        Err(_) => {
            warn!(%public_dir, "public assets directory not found; static assets will 404");
            false
        }
    }
}
