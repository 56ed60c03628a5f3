/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::ApiErrorCodes;
use std::fmt;
use std::io;
use thiserror::Error;

/// Boxed error handed back by an [`HttpTransport`](crate::rest::HttpTransport)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("{verb} {url} failed: {source}")]
    Transport {
        verb: &'static str,
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("Reading response body failed: {0}")]
    Read(#[source] BoxError),

    #[error("Multipart encoding failed at {stage}: {source}")]
    Encoding {
        stage: EncodeStage,
        #[source]
        source: io::Error,
    },

    #[error("XML parsing failed: {source}; XML={payload}")]
    Parse {
        #[source]
        source: quick_xml::DeError,
        payload: String,
    },

    #[error("JSON parsing failed: {source}; JSON={payload}")]
    JsonParse {
        #[source]
        source: serde_json::Error,
        payload: String,
    },

    #[error("Flickr error code {code}: {message}")]
    Api { code: u32, message: String },
}

impl FlickrError {
    /// Returns the known service error code when this is an [`FlickrError::Api`] error
    pub fn api_error_code(&self) -> Option<ApiErrorCodes> {
        match self {
            FlickrError::Api { code, .. } => ApiErrorCodes::try_from(*code).ok(),
            _ => None,
        }
    }
}

/// Step of multipart body construction that failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeStage {
    Field { name: String, value: String },
    FormFile { filename: String },
    PhotoData,
    Close,
}

impl fmt::Display for EncodeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeStage::Field { name, value } => write!(f, "field write [{name}={value}]"),
            EncodeStage::FormFile { filename } => write!(f, "form file creation [{filename}]"),
            EncodeStage::PhotoData => write!(f, "adding photo data"),
            EncodeStage::Close => write!(f, "multipart close"),
        }
    }
}
