/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::{BoxError, FlickrError};
use crate::rest::sign::redact_url;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use reqwest::header::CONTENT_TYPE;

/// Unread response body. Dropping it releases the underlying connection.
pub type BodyStream = BoxStream<'static, Result<Bytes, BoxError>>;

/// Fully formed multipart POST
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub url: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// Executes HTTP requests on behalf of the client.
///
/// Implementations make exactly one attempt per call. Deadlines and retries
/// at the socket level are the implementation's concern.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> impl Future<Output = Result<BodyStream, BoxError>> + Send;

    fn post(
        &self,
        request: UploadRequest,
    ) -> impl Future<Output = Result<BodyStream, BoxError>> + Send;
}

/// Default transport backed by [`reqwest::Client`]
#[derive(Debug, Default, Clone)]
pub struct ReqwestTransport {
    https_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(https_client: reqwest::Client) -> Self {
        Self { https_client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<BodyStream, BoxError> {
        let resp = self.https_client.get(url).send().await?;
        log::debug!("GET response status: {}", resp.status());
        Ok(resp.bytes_stream().map_err(BoxError::from).boxed())
    }

    async fn post(&self, request: UploadRequest) -> Result<BodyStream, BoxError> {
        let resp = self
            .https_client
            .post(&request.url)
            .header(CONTENT_TYPE, request.content_type)
            .body(request.body)
            .send()
            .await?;
        log::debug!("POST response status: {}", resp.status());
        Ok(resp.bytes_stream().map_err(BoxError::from).boxed())
    }
}

/// Sends a GET to `url` and hands back the unread body
pub(crate) async fn fetch<T: HttpTransport>(
    transport: &T,
    url: &str,
) -> Result<BodyStream, FlickrError> {
    log::debug!("GET {}", redact_url(url));
    transport
        .get(url)
        .await
        .map_err(|source| FlickrError::Transport {
            verb: "GET",
            url: redact_url(url),
            source,
        })
}

/// Sends the upload request and hands back the unread body
pub(crate) async fn post<T: HttpTransport>(
    transport: &T,
    request: UploadRequest,
) -> Result<BodyStream, FlickrError> {
    let url = request.url.clone();
    log::debug!("POST {url}");
    transport
        .post(request)
        .await
        .map_err(|source| FlickrError::Transport {
            verb: "POST",
            url,
            source,
        })
}
