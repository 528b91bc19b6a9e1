//! Download one artifact to a file
//!
//! Usage: cargo run --example fetch_artifact -- <target> <build_id> <artifact_name> <output>
//!
//! Optional environment variables:
//! - `FETCHARTIFACT_QUERY_URL_BASE` - build service base URL
//! - `FETCHARTIFACT_CHUNK_SIZE` - chunk size in bytes (default: 16 MiB)
//! - `RUST_LOG` - log filter (e.g. `fetchartifact=debug`)

use std::time::Instant;

use fetchartifact::{ArtifactFetcher, ArtifactRef, FetchConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [target, build_id, artifact_name, output] = args.as_slice() else {
        eprintln!("usage: fetch_artifact <target> <build_id> <artifact_name> <output>");
        std::process::exit(2);
    };

    let mut config = FetchConfig::default();
    if let Ok(base) = std::env::var("FETCHARTIFACT_QUERY_URL_BASE") {
        config.query_url_base = base;
    }
    if let Some(chunk_size) = std::env::var("FETCHARTIFACT_CHUNK_SIZE")
        .ok()
        .and_then(|c| c.parse().ok())
    {
        config.chunk_size = chunk_size;
    }
    config.validate()?;

    let fetcher = ArtifactFetcher::new(reqwest::Client::new()).with_config(config);
    let artifact = ArtifactRef::new(target, build_id, artifact_name);

    let start = Instant::now();
    let mut file = tokio::fs::File::create(output).await?;
    let result = fetcher.download_to_writer(&artifact, &mut file).await;
    drop(file);

    match result {
        Ok(bytes) => {
            println!(
                "{} -> {} ({} bytes in {:.1}s)",
                artifact,
                output,
                bytes,
                start.elapsed().as_secs_f64()
            );
            Ok(())
        }
        Err(e) => {
            // Don't leave a truncated artifact behind
            tokio::fs::remove_file(output).await.ok();
            Err(e.into())
        }
    }
}
