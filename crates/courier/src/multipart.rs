//! `multipart/form-data` body encoding
//!
//! Bodies carry zero or more text fields followed by exactly one file part
//! named `image`:
//!
//! ```text
//! --<boundary>\r\n
//! Content-Disposition: form-data; name="<key>"\r\n
//! \r\n
//! <value>\r\n
//! ...
//! --<boundary>\r\n
//! Content-Disposition: form-data; name="image"; filename="<file name>"\r\n
//! Content-Type: "content-type header"\r\n
//! \r\n
//! <file bytes>\r\n
//! --<boundary>--\r\n
//! ```

use bytes::{BufMut, Bytes, BytesMut};
use rand::Rng;
use rand::distributions::Alphanumeric;
use uuid::Uuid;

/// Form field name of the file part.
pub const FILE_FIELD_NAME: &str = "image";

/// Value written on the file part's `Content-Type` line.
pub const FILE_PART_CONTENT_TYPE: &str = "\"content-type header\"";

/// Length of the random stem of a generated file name.
pub const GENERATED_FILE_NAME_LEN: usize = 20;

/// Extension appended to generated file names.
pub const GENERATED_FILE_EXTENSION: &str = ".jpg";

const CRLF: &[u8] = b"\r\n";

/// Fresh boundary token: an upper-case hyphenated v4 UUID.
pub fn generate_boundary() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}

/// Random `[a-zA-Z0-9]{20}.jpg` file name.
pub fn generate_file_name() -> String {
    let stem: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_FILE_NAME_LEN)
        .map(char::from)
        .collect();
    format!("{stem}{GENERATED_FILE_EXTENSION}")
}

/// A multipart body waiting to be rendered.
#[derive(Debug, Clone)]
pub struct MultipartBody {
    boundary: String,
    fields: Vec<(String, String)>,
    file_name: String,
    file_data: Bytes,
}

impl MultipartBody {
    /// Body with the given boundary and file part and no text fields.
    pub fn new(boundary: impl Into<String>, file_name: impl Into<String>, file_data: Bytes) -> Self {
        Self {
            boundary: boundary.into(),
            fields: Vec::new(),
            file_name: file_name.into(),
            file_data,
        }
    }

    /// Append a text field. Fields render in insertion order.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Append every field from an iterator.
    pub fn with_fields<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Render the body.
    pub fn encode(&self) -> Bytes {
        let mut body = BytesMut::with_capacity(self.encoded_len_hint());

        for (name, value) in &self.fields {
            self.put_delimiter(&mut body);
            body.put_slice(format!("Content-Disposition: form-data; name=\"{name}\"").as_bytes());
            body.put_slice(CRLF);
            body.put_slice(CRLF);
            body.put_slice(value.as_bytes());
            body.put_slice(CRLF);
        }

        self.put_delimiter(&mut body);
        body.put_slice(
            format!(
                "Content-Disposition: form-data; name=\"{FILE_FIELD_NAME}\"; filename=\"{}\"",
                self.file_name
            )
            .as_bytes(),
        );
        body.put_slice(CRLF);
        body.put_slice(format!("Content-Type: {FILE_PART_CONTENT_TYPE}").as_bytes());
        body.put_slice(CRLF);
        body.put_slice(CRLF);
        body.put_slice(&self.file_data);
        body.put_slice(CRLF);

        body.put_slice(format!("--{}--", self.boundary).as_bytes());
        body.put_slice(CRLF);

        body.freeze()
    }

    fn put_delimiter(&self, body: &mut BytesMut) {
        body.put_slice(b"--");
        body.put_slice(self.boundary.as_bytes());
        body.put_slice(CRLF);
    }

    fn encoded_len_hint(&self) -> usize {
        let per_part = self.boundary.len() + 128;
        let fields: usize = self
            .fields
            .iter()
            .map(|(k, v)| per_part + k.len() + v.len())
            .sum();
        fields + per_part + self.file_name.len() + self.file_data.len()
    }
}
