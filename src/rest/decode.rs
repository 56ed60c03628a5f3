/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::transport::BodyStream;
use crate::rest::ResponseFormat;
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const STAT_OK: &str = "ok";

// Every XML response is wrapped in `<rsp stat="...">`. Only the status and the
// optional error are looked at here.
#[derive(Deserialize, Debug)]
struct Envelope {
    #[serde(rename = "@stat")]
    stat: String,

    #[serde(default)]
    err: Option<EnvelopeError>,
}

#[derive(Deserialize, Debug)]
struct EnvelopeError {
    #[serde(rename = "@code")]
    code: u32,

    #[serde(default, rename = "@msg")]
    msg: String,
}

// Legacy JSON responses carry the error inline with the status.
#[derive(Deserialize, Debug)]
struct JsonEnvelope {
    stat: String,

    #[serde(default)]
    code: u32,

    #[serde(default)]
    message: String,
}

/// Drains the body and decodes it in the requested wire format
pub async fn decode_response<T: DeserializeOwned>(
    body: BodyStream,
    format: ResponseFormat,
) -> Result<T, FlickrError> {
    let payload = read_body(body).await?;
    log::trace!("Parsing response {}", String::from_utf8_lossy(&payload));
    match format {
        ResponseFormat::Xml => decode_xml(&payload),
        ResponseFormat::Json => decode_json(&payload),
    }
}

/// Collects every chunk of the body into one buffer.
///
/// The body is consumed here so the connection is released whether decoding
/// later succeeds or not.
pub async fn read_body(mut body: BodyStream) -> Result<Bytes, FlickrError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = body.next().await {
        buf.extend_from_slice(&chunk.map_err(FlickrError::Read)?);
    }
    Ok(buf.freeze())
}

/// Decodes an XML response.
///
/// The envelope is parsed first. Only when it reports `stat="ok"` is the same
/// buffer parsed again into `T`; a failed call never yields a value.
/// Only the first root element is read; anything after it is ignored.
pub fn decode_xml<T: DeserializeOwned>(payload: &[u8]) -> Result<T, FlickrError> {
    let envelope: Envelope = parse_xml(payload)?;
    if envelope.stat != STAT_OK {
        let (code, message) = envelope
            .err
            .map(|e| (e.code, e.msg))
            .unwrap_or_default();
        return Err(FlickrError::Api { code, message });
    }
    parse_xml(payload)
}

/// Decodes a legacy `jsonFlickrApi(...)` response the same way as [`decode_xml`]
pub fn decode_json<T: DeserializeOwned>(payload: &[u8]) -> Result<T, FlickrError> {
    let json = extract_json(payload);
    let envelope: JsonEnvelope = parse_json(json)?;
    if envelope.stat != STAT_OK {
        return Err(FlickrError::Api {
            code: envelope.code,
            message: envelope.message,
        });
    }
    parse_json(json)
}

/// Strips the `jsonFlickrApi(` prefix and `)` suffix, along with surrounding
/// whitespace, from a JSONP payload. Plain JSON passes through trimmed.
pub fn extract_json(jsonp: &[u8]) -> &[u8] {
    let trimmed = jsonp.trim_ascii();
    trimmed
        .strip_prefix(b"jsonFlickrApi(")
        .and_then(|inner| inner.strip_suffix(b")"))
        .unwrap_or(trimmed)
}

fn parse_xml<T: DeserializeOwned>(payload: &[u8]) -> Result<T, FlickrError> {
    quick_xml::de::from_reader(payload).map_err(|source| FlickrError::Parse {
        source,
        payload: String::from_utf8_lossy(payload).into_owned(),
    })
}

fn parse_json<T: DeserializeOwned>(payload: &[u8]) -> Result<T, FlickrError> {
    serde_json::from_slice(payload).map_err(|source| FlickrError::JsonParse {
        source,
        payload: String::from_utf8_lossy(payload).into_owned(),
    })
}
