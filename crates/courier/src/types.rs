//! Request descriptor types
//!
//! A call is described by a [`Method`], a URL string, and either
//! [`RequestOptions`] or [`UploadOptions`]. Options carry named, defaulted
//! fields so callers only spell out what they need.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Upper-case verb as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How request parameters are carried.
///
/// `Url` only produces a query string for `GET`; for every other method the
/// parameters still travel as a JSON body, without a `Content-Type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Query string for `GET`, JSON body otherwise.
    #[default]
    Url,
    /// JSON body with `Content-Type: application/json`.
    Json,
}

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// JSON null
    Null,
    /// Boolean
    Bool(bool),
    /// Integer or floating point number
    Number(serde_json::Number),
    /// String
    String(String),
}

impl ParamValue {
    /// Text form used for query strings.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! param_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Number(serde_json::Number::from(value))
                }
            }
        )*
    };
}

param_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl From<f64> for ParamValue {
    /// Non-finite floats have no JSON form and become `Null`.
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value).map_or(Self::Null, Self::Number)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Request parameters, kept in key order.
pub type Parameters = BTreeMap<String, ParamValue>;

/// Request headers.
pub type Headers = HashMap<String, String>;

/// Options for [`HttpClient::perform_request`](crate::HttpClient::perform_request).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Parameters encoded according to `encoding`
    pub parameters: Parameters,
    /// Parameter encoding, `Url` by default
    pub encoding: Encoding,
    /// Extra request headers
    pub headers: Headers,
}

impl RequestOptions {
    /// Empty options: no parameters, URL encoding, no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Replace all parameters.
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the encoding.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Shorthand for `encoding(Encoding::Json)`.
    pub fn json(self) -> Self {
        self.encoding(Encoding::Json)
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Options for [`HttpClient::upload_multipart`](crate::HttpClient::upload_multipart).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadOptions {
    /// File name of the `image` part; generated when `None`
    pub file_name: Option<String>,
    /// Raw file content
    pub file_data: Bytes,
    /// Text fields sent before the file part
    pub parameters: BTreeMap<String, String>,
    /// Extra request headers
    pub headers: Headers,
}

impl UploadOptions {
    /// Upload of `file_data` with a generated file name and no fields.
    pub fn new(file_data: impl Into<Bytes>) -> Self {
        Self {
            file_data: file_data.into(),
            ..Default::default()
        }
    }

    /// Set the file name.
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Add a text field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}
