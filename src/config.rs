//! Configuration types for fetchartifact

use crate::chunked::DEFAULT_CHUNK_SIZE;
use crate::download_url::DEFAULT_QUERY_URL_BASE;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Settings used by [`ArtifactFetcher`](crate::ArtifactFetcher)
///
/// All fields have defaults, so an empty JSON object deserializes to
/// [`FetchConfig::default()`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base of the endpoint used for querying artifacts
    /// (default: "https://androidbuildinternal.googleapis.com")
    ///
    /// Replaced wholesale when set; point it at a mock server for testing.
    #[serde(default = "default_query_url_base")]
    pub query_url_base: String,

    /// Maximum size of each chunk yielded by chunked fetches (default: 16 MiB)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            query_url_base: default_query_url_base(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl FetchConfig {
    /// Check that the settings can produce working requests
    ///
    /// The query base must be an absolute `http` or `https` URL and the chunk
    /// size must be non-zero.
    pub fn validate(&self) -> Result<()> {
        validate_chunk_size(self.chunk_size)?;

        let parsed = url::Url::parse(&self.query_url_base).map_err(|e| {
            Error::config(
                format!("invalid query URL base '{}': {}", self.query_url_base, e),
                "query_url_base",
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(
                format!(
                    "query URL base must use http or https, got '{}'",
                    parsed.scheme()
                ),
                "query_url_base",
            ));
        }
        Ok(())
    }
}

pub(crate) fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::config("chunk size must be non-zero", "chunk_size"));
    }
    Ok(())
}

fn default_query_url_base() -> String {
    DEFAULT_QUERY_URL_BASE.to_string()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
