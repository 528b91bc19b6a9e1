//! # fetchartifact
//!
//! Async client for downloading artifacts from the Android build service.
//!
//! Given a build target, a build ID and an artifact name, this crate builds the
//! artifact's download URL and retrieves its bytes, either as one buffer or as a
//! stream of fixed-size chunks for large artifacts.
//!
//! ## Design
//!
//! - **Caller-owned session** - every fetch borrows a [`reqwest::Client`]; this
//!   crate never creates or closes one
//! - **No policy** - no retries, rate limiting or verification; failures go
//!   straight back to the caller
//! - **Bounded memory** - a chunked fetch holds at most about one chunk plus one
//!   network frame
//! - **Scoped logging** - diagnostics go through `tracing` to whatever
//!   subscriber is active for the calling task (a no-op when none is)
//!
//! ## Quick Start
//!
//! ```no_run
//! use futures::TryStreamExt;
//! use fetchartifact::{DEFAULT_CHUNK_SIZE, fetch_artifact, fetch_artifact_chunked};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = reqwest::Client::new();
//!
//!     let log = fetch_artifact(
//!         "aosp_arm64-trunk_staging-userdebug",
//!         "12345678",
//!         "logs/kernel.log",
//!         &session,
//!         None,
//!     )
//!     .await?;
//!     println!("kernel.log: {} bytes", log.len());
//!
//!     let mut chunks = fetch_artifact_chunked(
//!         "aosp_arm64-trunk_staging-userdebug",
//!         "12345678",
//!         "aosp_arm64-img-12345678.zip",
//!         &session,
//!         DEFAULT_CHUNK_SIZE,
//!         None,
//!     )
//!     .await?;
//!     while let Some(chunk) = chunks.try_next().await? {
//!         println!("chunk: {} bytes", chunk.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Fixed-size chunk streams over response bodies
pub mod chunked;
/// Configuration types
pub mod config;
/// Download URL construction
pub mod download_url;
/// Error types
pub mod error;
/// Artifact fetch operations
pub mod fetch;
/// Configured fetcher
pub mod fetcher;

pub use chunked::{ArtifactChunks, ChunkedBody, DEFAULT_CHUNK_SIZE};
pub use config::FetchConfig;
pub use download_url::{ArtifactRef, DEFAULT_QUERY_URL_BASE, build_download_url};
pub use error::{Error, Result};
pub use fetch::{fetch_artifact, fetch_artifact_chunked};
pub use fetcher::ArtifactFetcher;
