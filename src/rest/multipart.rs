/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::{EncodeStage, FlickrError};
use rand::RngExt;
use std::io::Write;
use std::path::Path;

// Extension to MIME type for the file part. Lookups are on the lower cased extension.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("jpe", "image/jpeg"),
    ("gif", "image/gif"),
    ("png", "image/png"),
];

/// Returns the MIME type for a file name, or `None` when the extension is unknown.
pub fn content_type_for(filename: &str) -> Option<&'static str> {
    let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
    CONTENT_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

/// Encodes `fields` plus one file part into a `multipart/form-data` body.
///
/// Returns the body along with the `Content-Type` header value, which carries
/// the boundary and must be sent as is.
pub fn encode_upload<'a, I>(
    fields: I,
    file_field: &str,
    filename: &str,
    data: &[u8],
) -> Result<(Vec<u8>, String), FlickrError>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut body = Vec::with_capacity(data.len() + 1024);
    let mut writer = MultipartWriter::new(&mut body);
    for (name, value) in fields {
        writer.write_field(name, value)?;
    }
    writer.write_file(file_field, filename, data)?;
    let content_type = writer.form_data_content_type();
    writer.close()?;
    Ok((body, content_type))
}

/// Streams multipart parts into any [`Write`] implementation
pub struct MultipartWriter<W: Write> {
    inner: W,
    boundary: String,
    first_part: bool,
}

impl<W: Write> MultipartWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_boundary(inner, random_boundary())
    }

    pub fn with_boundary(inner: W, boundary: String) -> Self {
        Self {
            inner,
            boundary,
            first_part: true,
        }
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request's `Content-Type` header
    pub fn form_data_content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub fn write_field(&mut self, name: &str, value: &str) -> Result<(), FlickrError> {
        let stage = || EncodeStage::Field {
            name: name.to_string(),
            value: value.to_string(),
        };
        let header = format!(
            "Content-Disposition: form-data; name=\"{}\"\r\n\r\n",
            escape_quotes(name)
        );
        self.start_part(&header)
            .and_then(|_| self.inner.write_all(value.as_bytes()))
            .map_err(|source| FlickrError::Encoding {
                stage: stage(),
                source,
            })
    }

    /// Writes the file part. Unknown extensions get no `Content-Type` line.
    pub fn write_file(
        &mut self,
        field: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<(), FlickrError> {
        let mut header = format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            escape_quotes(field),
            escape_quotes(filename)
        );
        if let Some(mime) = content_type_for(filename) {
            header.push_str(&format!("Content-Type: {mime}\r\n"));
        }
        header.push_str("\r\n");

        self.start_part(&header)
            .map_err(|source| FlickrError::Encoding {
                stage: EncodeStage::FormFile {
                    filename: filename.to_string(),
                },
                source,
            })?;
        self.inner
            .write_all(data)
            .map_err(|source| FlickrError::Encoding {
                stage: EncodeStage::PhotoData,
                source,
            })
    }

    /// Appends the terminating boundary and hands back the inner writer
    pub fn close(mut self) -> Result<W, FlickrError> {
        let trailer = if self.first_part {
            format!("--{}--\r\n", self.boundary)
        } else {
            format!("\r\n--{}--\r\n", self.boundary)
        };
        self.inner
            .write_all(trailer.as_bytes())
            .and_then(|_| self.inner.flush())
            .map_err(|source| FlickrError::Encoding {
                stage: EncodeStage::Close,
                source,
            })?;
        Ok(self.inner)
    }

    fn start_part(&mut self, header: &str) -> std::io::Result<()> {
        if self.first_part {
            write!(self.inner, "--{}\r\n", self.boundary)?;
            self.first_part = false;
        } else {
            write!(self.inner, "\r\n--{}\r\n", self.boundary)?;
        }
        self.inner.write_all(header.as_bytes())
    }
}

fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn random_boundary() -> String {
    let mut rng = rand::rng();
    let mut buf = [0u8; 30];
    rng.fill(&mut buf);
    buf.iter().map(|b| format!("{b:02x}")).collect()
}
