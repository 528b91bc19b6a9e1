//! Artifact download over a caller-supplied HTTP session
//!
//! Both entry points issue a single `GET` through the given [`reqwest::Client`],
//! which stays owned by the caller. Timeouts, proxies and redirect policy are
//! whatever that client was built with. Nothing is retried here.

use bytes::Bytes;
use futures::StreamExt;
use reqwest::{Client, Response};

use crate::chunked::{ArtifactChunks, ChunkedBody};
use crate::config::validate_chunk_size;
use crate::download_url::{DEFAULT_QUERY_URL_BASE, build_download_url};
use crate::error::{Error, Result};

/// Fetch an artifact from the build server into memory
///
/// `query_url_base` defaults to [`DEFAULT_QUERY_URL_BASE`] when `None`.
///
/// # Errors
///
/// - [`Error::HttpStatus`] if the server answers with a non-2xx status; the body
///   is not read
/// - [`Error::Transport`] if the request or the body read fails
///
/// A failed body read never produces a truncated buffer.
pub async fn fetch_artifact(
    target: &str,
    build_id: &str,
    artifact_name: &str,
    session: &Client,
    query_url_base: Option<&str>,
) -> Result<Bytes> {
    let url = build_download_url(
        target,
        build_id,
        artifact_name,
        query_url_base.unwrap_or(DEFAULT_QUERY_URL_BASE),
    );
    let response = send(session, &url).await?;
    let body = response.bytes().await?;
    tracing::debug!(url = %url, bytes = body.len(), "artifact download complete");
    Ok(body)
}

/// Fetch an artifact from the build server as a stream of chunks
///
/// The request is sent and its status checked before this function returns, so
/// a failed status surfaces here rather than from the stream. The body itself is
/// read lazily as the returned stream is polled.
///
/// Every chunk is exactly `chunk_size` bytes except the last, which holds the
/// remainder. Pass [`DEFAULT_CHUNK_SIZE`](crate::DEFAULT_CHUNK_SIZE) for the
/// usual 16 MiB. The stream owns the response; dropping it early releases the
/// connection.
///
/// # Errors
///
/// - [`Error::Config`] if `chunk_size` is zero (no request is sent)
/// - [`Error::HttpStatus`] if the server answers with a non-2xx status
/// - [`Error::Transport`] if the request fails; body read failures are yielded
///   by the stream, after which it ends
pub async fn fetch_artifact_chunked(
    target: &str,
    build_id: &str,
    artifact_name: &str,
    session: &Client,
    chunk_size: usize,
    query_url_base: Option<&str>,
) -> Result<ArtifactChunks> {
    validate_chunk_size(chunk_size)?;
    let url = build_download_url(
        target,
        build_id,
        artifact_name,
        query_url_base.unwrap_or(DEFAULT_QUERY_URL_BASE),
    );
    let response = send(session, &url).await?;
    Ok(ChunkedBody::new(response.bytes_stream().boxed(), chunk_size))
}

/// Issue the GET and reject non-success statuses
async fn send(session: &Client, url: &str) -> Result<Response> {
    tracing::debug!(url = %url, "beginning download");

    let response = session.get(url).send().await.map_err(|e| {
        tracing::debug!(url = %url, error = %e, "artifact request failed");
        Error::Transport(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %url, status = %status, "artifact download returned error status");
        return Err(Error::HttpStatus {
            status,
            url: url.to_string(),
            headers: response.headers().clone(),
        });
    }

    Ok(response)
}
