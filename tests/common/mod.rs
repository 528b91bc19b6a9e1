//! Common test utilities for fetchartifact integration tests

#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build target used throughout the tests
pub const TARGET: &str = "sdk_phone64_x86_64-trunk_staging-userdebug";
/// Build ID used throughout the tests
pub const BUILD_ID: &str = "12345678";
/// Artifact name containing a slash
pub const ARTIFACT: &str = "logs/kernel.log";

/// Request path the build service sees for [`TARGET`]/[`BUILD_ID`]/[`ARTIFACT`]
pub const ARTIFACT_PATH: &str = "/android/internal/build/v3/builds/12345678/\
    sdk_phone64_x86_64-trunk_staging-userdebug/attempts/latest/artifacts/logs%2Fkernel.log/url";

/// Deterministic artifact content of the given length
pub fn artifact_body(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 256) as u8).collect()
}

/// Start a mock build service answering [`ARTIFACT_PATH`] with `response`
pub async fn mock_artifact(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ARTIFACT_PATH))
        .respond_with(response)
        .mount(&server)
        .await;
    server
}

/// A base URL nothing is listening on
pub fn unreachable_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Start a server that answers every request with a 200 declaring
/// `content_length` bytes, sends only `sent` of them and closes the connection
pub async fn truncating_server(content_length: usize, sent: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            let head = format!("HTTP/1.1 200 OK\r\ncontent-length: {content_length}\r\n\r\n");
            let _ = socket.write_all(head.as_bytes()).await;
            let _ = socket.write_all(&artifact_body(sent)).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}

/// In-memory log sink for a scoped `tracing` subscriber
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Everything written so far
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
