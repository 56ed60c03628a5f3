/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::errors::FlickrError;
use crate::rest::{
    ApiClient, ApiParams, Creds, Endpoints, HttpTransport, ReqwestTransport, ResponseFormat,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Handle to the Flickr API.
///
/// Cloning is cheap; clones share credentials and transport.
///
/// ```rust
/// use flickr::rest::{Client, Creds};
///
/// let client = Client::new(Creds::from_tokens("api-key", "api-secret", None));
/// let auth_url = client.auth_url(flickr::rest::Perms::Read);
/// assert!(auth_url.contains("perms=read"));
/// ```
pub struct Client<T: HttpTransport = ReqwestTransport> {
    pub(crate) api_client: Arc<ApiClient<T>>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self::with_transport(creds, ReqwestTransport::default())
    }
}

impl<T: HttpTransport> Client<T> {
    /// Creates a client that sends its requests through `transport`
    pub fn with_transport(creds: Creds, transport: T) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds, transport)),
        }
    }

    pub fn creds(&self) -> &Creds {
        &self.api_client.creds
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.api_client.endpoints
    }

    /// Lower level access for methods this library does not wrap
    pub fn api_client(&self) -> &ApiClient<T> {
        &self.api_client
    }

    /// Calls any REST method and decodes the `ok` response into `R`
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: &ApiParams,
        authenticated: bool,
    ) -> Result<R, FlickrError> {
        self.api_client.call(method, params, authenticated).await
    }
}

impl<T: HttpTransport + Clone> Client<T> {
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        Arc::make_mut(&mut self.api_client).endpoints = endpoints;
        self
    }

    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        Arc::make_mut(&mut self.api_client).format = format;
        self
    }

    /// Replaces the per-user auth token.
    ///
    /// Other clones keep the token they had; requests already in flight are
    /// unaffected.
    pub fn set_auth_token(&mut self, auth_token: Option<&str>) {
        Arc::make_mut(&mut self.api_client).creds.auth_token = auth_token.map(Into::into);
    }
}

impl<T: HttpTransport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            api_client: self.api_client.clone(),
        }
    }
}

impl<T: HttpTransport> std::fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_client", &self.api_client)
            .finish()
    }
}
