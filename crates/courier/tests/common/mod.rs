//! Common test utilities and helpers

pub mod mock_transport;

use bytes::Bytes;
use futures::stream;
use std::convert::Infallible;

/// One parsed part of a multipart body
#[allow(dead_code)]
#[derive(Debug)]
pub struct Part {
    pub name: Option<String>,
    pub file_name: Option<String>,
    pub data: Bytes,
}

/// Parse a multipart body with a conformant parser
#[allow(dead_code)]
pub async fn parse_multipart(body: Bytes, boundary: &str) -> Vec<Part> {
    let stream = stream::once(async move { Ok::<_, Infallible>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.expect("malformed multipart body") {
        let name = field.name().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.expect("unreadable part");
        parts.push(Part {
            name,
            file_name,
            data,
        });
    }
    parts
}

/// Extract the boundary from a `multipart/form-data` content type
#[allow(dead_code)]
pub fn boundary_of(content_type: &str) -> String {
    multer::parse_boundary(content_type).expect("content type without boundary")
}

/// Install a test subscriber so `RUST_LOG=courier=debug` shows client logs
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
