//! File a bug report and attach a screenshot.
//!
//! ```text
//! RUST_LOG=courier=debug cargo run --example report_bug -- https://bugs.example.com screenshot.jpg
//! ```

use courier::{ClientConfig, HttpClient, Method, RequestOptions, TransportClient, UploadOptions};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct CreatedBug {
    id: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:8080".to_string());
    let screenshot = args.next();

    let client = TransportClient::from_config(
        ClientConfig::builder()
            .timeout(Duration::from_secs(20))
            .default_header("x-app-version", env!("CARGO_PKG_VERSION"))
            .build(),
    )?;

    let bug: CreatedBug = match client
        .perform_request(
            Method::Post,
            &format!("{base_url}/api/bugs"),
            RequestOptions::new()
                .param("title", "App freezes on the settings screen")
                .param("severity", 2)
                .param("reproducible", true)
                .json(),
        )
        .await
    {
        Ok(bug) => bug,
        Err(err) => {
            eprintln!("{}", err.description());
            return Err(err.into());
        }
    };
    println!("created bug #{}", bug.id);

    if let Some(path) = screenshot {
        let data = std::fs::read(&path)?;
        let attachment: serde_json::Value = client
            .upload_multipart(
                &format!("{base_url}/api/bugs/{}/attachments", bug.id),
                UploadOptions::new(data).field("bug_id", bug.id.to_string()),
            )
            .await?;
        println!("uploaded {path}: {attachment}");
    }

    Ok(())
}
