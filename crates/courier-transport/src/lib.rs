//! Transport abstraction layer for Courier
//!
//! Provides a trait-based transport abstraction that the Courier client
//! dispatches every request through. The client only builds plain-data
//! requests and interprets plain-data responses; the byte-level exchange
//! belongs to whichever `Transport` is injected.
//!
//! # Architecture
//!
//! - **Transport trait**: Generic interface for any transport implementation
//! - **HTTP transport**: Production adapter via reqwest
//! - **Error handling**: Transport-level error type

#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! # Usage
//!
//! ```ignore
//! use courier_transport::{HttpRequest, HttpTransport, Transport};
//!
//! let transport = HttpTransport::new()?;
//! let request = HttpRequest::new("GET", "https://api.example.com/bugs");
//! let response = transport.send_http(request).await?;
//! ```

pub mod error;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use http::{HttpTransport, HttpTransportConfig};
pub use traits::{HttpRequest, HttpResponse, Transport};
