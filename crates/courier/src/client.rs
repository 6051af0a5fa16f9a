//! Client interface and its transport-backed implementation
//!
//! [`HttpClient`] is the operation contract: perform a request, or upload a
//! file as `multipart/form-data`, and get back either the raw body or a
//! JSON-decoded value. [`TransportClient`] implements it on top of any
//! [`Transport`], building plain-data requests, dispatching them, and
//! validating the status range before decoding.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::multipart::{MultipartBody, generate_boundary, generate_file_name};
use crate::observability::{CallLog, decode_failed};
use crate::types::{Encoding, Headers, Method, RequestOptions, UploadOptions};
use async_trait::async_trait;
use bytes::Bytes;
use courier_transport::{HttpRequest, HttpTransport, Transport};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use url::Url;

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Protocol-typed HTTP client.
///
/// Implementors provide the two byte-level operations; the typed operations
/// decode the body as JSON on top of them. Every failure is a
/// [`ClientError`]; no partial result is ever returned.
///
/// # Example
///
/// ```rust,no_run
/// # use courier::{HttpClient, Method, RequestOptions, TransportClient};
/// # #[derive(serde::Deserialize)] struct Bug { id: u64 }
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TransportClient::new()?;
/// let bugs: Vec<Bug> = client
///     .perform_request(
///         Method::Get,
///         "https://bugs.example.com/api/bugs",
///         RequestOptions::new().param("status", "open"),
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a request and return the raw response body.
    async fn perform_request_bytes(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Bytes>;

    /// Upload a file as `multipart/form-data` and return the raw response body.
    async fn upload_multipart_bytes(&self, url: &str, upload: UploadOptions) -> Result<Bytes>;

    /// Perform a request and decode the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// Fails with [`ClientError::InvalidData`] if the body is not valid JSON
    /// for `T`, besides every failure of
    /// [`perform_request_bytes`](Self::perform_request_bytes).
    async fn perform_request<T>(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let body = self.perform_request_bytes(method, url, options).await?;
        decode_json(url, &body)
    }

    /// Upload a file as `multipart/form-data` and decode the JSON response into `T`.
    async fn upload_multipart<T>(&self, url: &str, upload: UploadOptions) -> Result<T>
    where
        T: DeserializeOwned,
        Self: Sized,
    {
        let body = self.upload_multipart_bytes(url, upload).await?;
        decode_json(url, &body)
    }
}

fn decode_json<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        decode_failed(url, std::any::type_name::<T>(), &e.to_string());
        ClientError::InvalidData(e.to_string())
    })
}

/// Parse an absolute `http`/`https` URL.
fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| ClientError::NotValidUrl(format!("{url:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(ClientError::NotValidUrl(format!(
            "{url:?}: unsupported scheme '{scheme}'"
        ))),
    }
}

/// [`HttpClient`] backed by a [`Transport`].
///
/// Holds no per-call state; clones share the transport.
pub struct TransportClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
    default_headers: Headers,
}

impl TransportClient<HttpTransport> {
    /// Client over a reqwest transport with default configuration.
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Client over a reqwest transport built from `config`.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(config.transport)
            .map_err(|e| ClientError::Undefined(e.to_string()))?;
        Ok(Self {
            transport: Arc::new(transport),
            default_headers: config.default_headers,
        })
    }
}

impl<T: Transport> TransportClient<T> {
    /// Client over the given transport.
    pub fn with_transport(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Client over a transport shared with other owners.
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self {
            transport,
            default_headers: Headers::new(),
        }
    }

    /// Add a header sent with every request.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request `perform_request` would dispatch.
    ///
    /// With [`Encoding::Url`] and `GET`, parameters are appended to the query
    /// string. With [`Encoding::Url`] and any other method they are sent as a
    /// JSON body, without a `Content-Type` header. With [`Encoding::Json`]
    /// they are sent as a JSON body with `Content-Type: application/json`.
    pub fn build_request(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpRequest> {
        let mut url = parse_url(url)?;

        let body = match (options.encoding, method) {
            (Encoding::Url, Method::Get) => {
                if !options.parameters.is_empty() {
                    let mut pairs = url.query_pairs_mut();
                    for (key, value) in &options.parameters {
                        pairs.append_pair(key, &value.to_query_value());
                    }
                }
                None
            }
            _ => Some(serde_json::to_vec(&options.parameters)?),
        };

        let mut request = HttpRequest::new(method.as_str(), url.as_str())
            .with_headers(self.default_headers.clone())
            .with_headers(options.headers.clone());

        if options.encoding == Encoding::Json {
            request.set_header(CONTENT_TYPE, APPLICATION_JSON);
        }
        if let Some(body) = body {
            request = request.with_body(body);
        }

        Ok(request)
    }

    /// Build the request `upload_multipart` would dispatch.
    pub fn build_upload(&self, url: &str, upload: UploadOptions) -> Result<HttpRequest> {
        let url = parse_url(url)?;

        let file_name = upload.file_name.unwrap_or_else(generate_file_name);
        let body = MultipartBody::new(generate_boundary(), file_name, upload.file_data)
            .with_fields(upload.parameters);

        Ok(HttpRequest::new(Method::Post.as_str(), url.as_str())
            .with_headers(self.default_headers.clone())
            .with_headers(upload.headers)
            .with_header(CONTENT_TYPE, body.content_type())
            .with_body(body.encode()))
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<Bytes> {
        let log = CallLog::sending(request.method.clone(), &request.url, request.body_len());

        let response = match self.transport.send_http(request).await {
            Ok(response) => response,
            Err(err) => {
                log.transport_failed(&err);
                return Err(err.into());
            }
        };

        if !response.is_success() {
            log.rejected(response.status, response.body.len());
            return Err(ClientError::BadServerResponse {
                status: response.status,
            });
        }

        log.succeeded(response.status, response.body.len());
        Ok(response.body)
    }
}

#[async_trait]
impl<T: Transport> HttpClient for TransportClient<T> {
    async fn perform_request_bytes(
        &self,
        method: Method,
        url: &str,
        options: RequestOptions,
    ) -> Result<Bytes> {
        let request = self.build_request(method, url, &options)?;
        self.dispatch(request).await
    }

    async fn upload_multipart_bytes(&self, url: &str, upload: UploadOptions) -> Result<Bytes> {
        let request = self.build_upload(url, upload)?;
        self.dispatch(request).await
    }
}

impl<T: Transport> Clone for TransportClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            default_headers: self.default_headers.clone(),
        }
    }
}

impl<T: Transport> fmt::Debug for TransportClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportClient")
            .field("default_headers", &self.default_headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
