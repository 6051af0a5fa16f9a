//! HTTP transport implementation
//!
//! Provides the reqwest-backed adapter for the Transport trait.

pub mod client;

pub use client::{HttpTransport, HttpTransportConfig};
