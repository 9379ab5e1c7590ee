//! Cached HTTP fetcher for the source archive.
//!
//! Downloads are cached on disk keyed by the SHA-256 hex digest of the URL
//! string. The key never incorporates the response body, so a changed
//! payload behind an unchanged URL is served stale indefinitely; bumping
//! the URL (or clearing the cache directory) is the only invalidation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::Client;
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::{debug, info};

/// HTTP fetcher with a URL-keyed file cache.
///
/// The cache directory is an explicit constructor argument so tests can
/// point it at an isolated temporary location; production callers pass
/// [`Fetcher::default_cache_dir`].
pub struct Fetcher {
    client: Client,
    cache_dir: PathBuf,
}

impl Fetcher {
    /// Create a fetcher writing its cache under `cache_dir`.
    ///
    /// The directory is created lazily on the first cache write, not here.
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        // Bound connection establishment only; a large archive on a slow
        // link may legitimately take minutes to stream.
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client, cache_dir })
    }

    /// Platform cache location, e.g. `~/.cache/iconpack` on Linux.
    pub fn default_cache_dir() -> Result<PathBuf> {
        dirs::cache_dir()
            .map(|dir| dir.join("iconpack"))
            .ok_or_else(|| anyhow!("Could not determine a cache directory for this platform"))
    }

    /// Cache file path for `url`: `<cache_dir>/<sha256(url) hex>`.
    pub fn cache_path(&self, url: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(url.as_bytes());
        self.cache_dir.join(hex::encode(hasher.finalize()))
    }

    /// Return the bytes behind `url`, downloading at most once per URL.
    ///
    /// Cache hits never touch the network. On a miss the whole response
    /// body is buffered, persisted to the cache file, and returned.
    ///
    /// # Errors
    ///
    /// Fails on a network error, a non-success HTTP status, or a
    /// filesystem error reading or writing the cache.
    pub async fn obtain(&self, url: &str) -> Result<Vec<u8>> {
        let cache_file = self.cache_path(url);

        match fs::read(&cache_file).await {
            Ok(bytes) => {
                debug!(cache_file = %cache_file.display(), "archive served from cache");
                return Ok(bytes);
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read cache file {}", cache_file.display()));
            }
        }

        info!(%url, "downloading archive");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {url}"))?;

        if !resp.status().is_success() {
            bail!("HTTP request failed with status: {}", resp.status());
        }

        let body = resp.bytes().await?;

        persist(&self.cache_dir, &cache_file, &body).await?;
        debug!(bytes = body.len(), cache_file = %cache_file.display(), "archive cached");

        Ok(body.to_vec())
    }
}

async fn persist(cache_dir: &Path, cache_file: &Path, body: &[u8]) -> Result<()> {
    fs::create_dir_all(cache_dir)
        .await
        .with_context(|| format!("Failed to create cache directory {}", cache_dir.display()))?;
    fs::write(cache_file, body)
        .await
        .with_context(|| format!("Failed to write cache file {}", cache_file.display()))
}
