//! # Courier
//!
//! Thin, protocol-typed HTTP client supporting:
//! - JSON and query-string encoded requests
//! - `multipart/form-data` file uploads
//! - Typed JSON decoding or raw byte responses
//! - A small, fixed error taxonomy
//!
//! Connection management, TLS and timeouts belong to the injected
//! [`Transport`]; the client itself only builds requests, checks the status
//! range and decodes bodies.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courier::{HttpClient, Method, RequestOptions, TransportClient, UploadOptions};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Created {
//!     id: u64,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TransportClient::new()?;
//!
//!     let created: Created = client
//!         .perform_request(
//!             Method::Post,
//!             "https://bugs.example.com/api/bugs",
//!             RequestOptions::new().param("title", "Crash on launch").json(),
//!         )
//!         .await?;
//!
//!     let screenshot = std::fs::read("screenshot.jpg")?;
//!     let _: serde_json::Value = client
//!         .upload_multipart(
//!             "https://bugs.example.com/api/attachments",
//!             UploadOptions::new(screenshot).field("bug_id", created.id.to_string()),
//!         )
//!         .await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{HttpClient, TransportClient};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ClientError, Result};
pub use multipart::MultipartBody;
pub use types::{Encoding, Headers, Method, ParamValue, Parameters, RequestOptions, UploadOptions};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod multipart;
pub mod observability;
pub mod types;

// Re-export the transport layer for adapters and tests
pub use courier_transport as transport;
pub use courier_transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
pub use async_trait::async_trait;
pub use bytes::Bytes;
