//! Configured fetcher bound to a caller-owned HTTP session

use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::Client;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::chunked::ArtifactChunks;
use crate::config::FetchConfig;
use crate::download_url::ArtifactRef;
use crate::error::Result;
use crate::fetch::{fetch_artifact, fetch_artifact_chunked};

/// Fetches artifacts using a shared [`reqwest::Client`] and a [`FetchConfig`]
///
/// Holds a clone of the caller's client handle, which shares the caller's
/// connection pool. Holds no other state, so one fetcher can serve any number
/// of concurrent fetches.
///
/// # Example
///
/// ```no_run
/// use fetchartifact::{ArtifactFetcher, ArtifactRef};
///
/// # async fn example() -> fetchartifact::Result<()> {
/// let client = reqwest::Client::new();
/// let fetcher = ArtifactFetcher::new(client);
///
/// let artifact = ArtifactRef::new(
///     "aosp_arm64-trunk_staging-userdebug",
///     "12345678",
///     "logs/kernel.log",
/// );
/// let bytes = fetcher.fetch(&artifact).await?;
/// println!("{} bytes", bytes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ArtifactFetcher {
    client: Client,
    config: FetchConfig,
}

impl ArtifactFetcher {
    /// Create a fetcher with the default configuration
    pub fn new(client: Client) -> Self {
        Self {
            client,
            config: FetchConfig::default(),
        }
    }

    /// Replace the configuration
    ///
    /// The configuration is not validated here; invalid values surface as
    /// errors from the fetch calls (see [`FetchConfig::validate`]).
    #[must_use]
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Download URL for `artifact` under the configured query base
    pub fn download_url(&self, artifact: &ArtifactRef) -> String {
        artifact.download_url(&self.config.query_url_base)
    }

    /// Fetch the whole artifact into memory
    pub async fn fetch(&self, artifact: &ArtifactRef) -> Result<Bytes> {
        fetch_artifact(
            &artifact.target,
            &artifact.build_id,
            &artifact.artifact_name,
            &self.client,
            Some(self.config.query_url_base.as_str()),
        )
        .await
    }

    /// Fetch the artifact as a stream of `chunk_size` chunks
    pub async fn fetch_chunked(&self, artifact: &ArtifactRef) -> Result<ArtifactChunks> {
        fetch_artifact_chunked(
            &artifact.target,
            &artifact.build_id,
            &artifact.artifact_name,
            &self.client,
            self.config.chunk_size,
            Some(self.config.query_url_base.as_str()),
        )
        .await
    }

    /// Stream the artifact into `writer`, returning the number of bytes written
    ///
    /// Peak memory stays around one chunk plus one network frame. On error, bytes
    /// already written are left in `writer`; discarding them is up to the caller.
    pub async fn download_to_writer<W>(
        &self,
        artifact: &ArtifactRef,
        writer: &mut W,
    ) -> Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        let mut chunks = self.fetch_chunked(artifact).await?;
        let mut written = 0u64;

        while let Some(chunk) = chunks.try_next().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;

        tracing::debug!(artifact = %artifact, bytes = written, "artifact written to sink");
        Ok(written)
    }
}
