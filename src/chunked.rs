//! Fixed-size re-chunking of a streaming response body
//!
//! HTTP bodies arrive in whatever frame sizes the transport produces. [`ChunkedBody`]
//! regroups them so that every item is exactly `chunk_size` bytes, except the final
//! one which holds the remainder.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::Stream;
use futures::stream::BoxStream;

use crate::error::{Error, Result};

/// Default chunk size for chunked fetches (16 MiB)
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Chunk stream over an artifact download response
///
/// Owns the underlying response: dropping it releases the connection.
pub type ArtifactChunks = ChunkedBody<BoxStream<'static, reqwest::Result<Bytes>>>;

/// Stream adapter yielding fixed-size chunks from an inner byte stream
///
/// Once the inner stream fails, the error is yielded once, any buffered bytes
/// are discarded and the stream ends.
pub struct ChunkedBody<S> {
    inner: S,
    chunk_size: usize,
    buffer: BytesMut,
    done: bool,
}

impl<S> ChunkedBody<S> {
    /// Wrap `inner`, regrouping its frames into `chunk_size` pieces
    ///
    /// A zero `chunk_size` is treated as 1. The fetch functions reject zero
    /// before a request is made.
    pub fn new(inner: S, chunk_size: usize) -> Self {
        Self {
            inner,
            chunk_size: chunk_size.max(1),
            buffer: BytesMut::new(),
            done: false,
        }
    }
}

impl<S, E> Stream for ChunkedBody<S>
where
    S: Stream<Item = std::result::Result<Bytes, E>> + Unpin,
    E: Into<Error>,
{
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if this.buffer.len() >= this.chunk_size {
                let chunk = this.buffer.split_to(this.chunk_size).freeze();
                return Poll::Ready(Some(Ok(chunk)));
            }

            if this.done {
                if this.buffer.is_empty() {
                    return Poll::Ready(None);
                }
                let rest = this.buffer.split().freeze();
                return Poll::Ready(Some(Ok(rest)));
            }

            match Pin::new(&mut this.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(frame))) => {
                    // Pass through frames that already are one full chunk.
                    if this.buffer.is_empty() && frame.len() == this.chunk_size {
                        return Poll::Ready(Some(Ok(frame)));
                    }
                    this.buffer.extend_from_slice(&frame);
                }
                Poll::Ready(Some(Err(e))) => {
                    this.done = true;
                    this.buffer.clear();
                    return Poll::Ready(Some(Err(e.into())));
                }
                Poll::Ready(None) => this.done = true,
                Poll::Pending => return Poll::Pending,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            let n = self.buffer.len().div_ceil(self.chunk_size);
            (n, Some(n))
        } else {
            (self.buffer.len() / self.chunk_size, None)
        }
    }
}
