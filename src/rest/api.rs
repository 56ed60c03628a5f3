/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::decode::decode_response;
use crate::rest::errors::FlickrError;
use crate::rest::multipart::encode_upload;
use crate::rest::sign::{build_url, sign, signed_url, ApiParams};
use crate::rest::transport::{fetch, post, HttpTransport, UploadRequest};
use crate::rest::ResponseFormat;
use num_enum::TryFromPrimitive;
use serde::de::DeserializeOwned;

// Root Flickr services
pub const API_ORIGIN: &str = "https://api.flickr.com/services";

// Photo upload endpoint
pub const UPLOAD_URL: &str = "https://api.flickr.com/services/upload";

/// Where requests are sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base for `rest` and `auth` requests, without a trailing slash
    pub service: String,
    pub upload: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            service: API_ORIGIN.into(),
            upload: UPLOAD_URL.into(),
        }
    }
}

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient<T: HttpTransport> {
    pub(crate) creds: Creds,
    pub(crate) endpoints: Endpoints,
    pub(crate) format: ResponseFormat,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(creds: Creds, transport: T) -> Self {
        Self {
            creds,
            endpoints: Endpoints::default(),
            format: ResponseFormat::default(),
            transport,
        }
    }

    /// Returns the signed (or unsigned) REST URL for `method`
    pub fn method_url(&self, method: &str, params: &ApiParams, authenticated: bool) -> String {
        let mut args = params.clone();
        if let ResponseFormat::Json = self.format {
            args.insert("format".into(), "json".into());
        }
        build_url(
            &self.endpoints.service,
            "rest",
            &self.creds,
            method,
            &args,
            authenticated,
        )
    }

    /// Returns a signed URL under the `auth` path
    pub fn auth_url(&self, params: &ApiParams) -> String {
        signed_url(&self.endpoints.service, "auth", &self.creds, params)
    }

    /// Calls a REST method and decodes the response into `R`
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: &ApiParams,
        authenticated: bool,
    ) -> Result<R, FlickrError> {
        let url = self.method_url(method, params, authenticated);
        self.get(&url).await
    }

    /// Performs a get request against a fully formed URL
    pub async fn get<R: DeserializeOwned>(&self, url: &str) -> Result<R, FlickrError> {
        let body = fetch(&self.transport, url).await?;
        decode_response(body, self.format).await
    }

    /// Builds the signed multipart upload request.
    ///
    /// The file goes in the `photo` part. `fields` is cloned before the
    /// credentials, `async=1` and the signature are added to it.
    pub fn upload_request(
        &self,
        filename: &str,
        photo: &[u8],
        fields: &ApiParams,
    ) -> Result<UploadRequest, FlickrError> {
        let mut args = fields.clone();
        args.insert("api_key".into(), self.creds.api_key.clone());
        if let Some(token) = &self.creds.auth_token {
            args.insert("auth_token".into(), token.clone());
        }
        args.insert("async".into(), "1".into());
        let sig = sign(&self.creds.secret, &args);
        args.insert("api_sig".into(), sig);

        let (body, content_type) = encode_upload(&args, "photo", filename, photo)?;
        Ok(UploadRequest {
            url: self.endpoints.upload.clone(),
            content_type,
            body,
        })
    }

    /// Posts an upload request. Upload responses are always XML.
    pub async fn post<R: DeserializeOwned>(
        &self,
        request: UploadRequest,
    ) -> Result<R, FlickrError> {
        let body = post(&self.transport, request).await?;
        decode_response(body, ResponseFormat::Xml).await
    }
}

impl<T: HttpTransport> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("endpoints", &self.endpoints)
            .field("format", &self.format)
            .finish()
    }
}

/// Error codes per the Flickr API site
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
}

/// Application and user credentials.
///
/// The secret is only used for signing and never sent.
#[derive(Default, Clone)]
pub struct Creds {
    pub(crate) api_key: String,
    pub(crate) secret: String,
    pub(crate) auth_token: Option<String>,
}

impl Creds {
    pub fn from_tokens(api_key: &str, secret: &str, auth_token: Option<&str>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
            auth_token: auth_token.map(Into::into),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &"xxx")
            .field("secret", &"xxx")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "xxx"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::errors::BoxError;
    use crate::rest::transport::BodyStream;
    use bytes::Bytes;
    use futures::{stream, StreamExt};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Recorder {
        urls: Arc<Mutex<Vec<String>>>,
        response: &'static str,
    }

    impl HttpTransport for Recorder {
        async fn get(&self, url: &str) -> Result<BodyStream, BoxError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(stream::iter(vec![Ok(Bytes::from_static(self.response.as_bytes()))]).boxed())
        }

        async fn post(&self, request: UploadRequest) -> Result<BodyStream, BoxError> {
            self.urls.lock().unwrap().push(request.url);
            Ok(stream::iter(vec![Ok(Bytes::from_static(self.response.as_bytes()))]).boxed())
        }
    }

    fn query_of(url: &str) -> HashMap<String, String> {
        url::Url::parse(url)
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }

    #[test]
    fn creds_debug_is_redacted() {
        let creds = Creds::from_tokens("k-123", "s-456", Some("t-789"));
        let text = format!("{creds:?}");
        assert!(!text.contains("k-123"));
        assert!(!text.contains("s-456"));
        assert!(!text.contains("t-789"));
    }

    #[test]
    fn json_format_adds_format_param() {
        let mut api = ApiClient::new(Creds::from_tokens("k", "s", None), Recorder::default());
        api.format = ResponseFormat::Json;
        let query = query_of(&api.method_url("flickr.test.echo", &ApiParams::new(), true));
        assert_eq!(query["format"], "json");
        assert_eq!(query["method"], "flickr.test.echo");
    }

    #[test]
    fn api_error_code_lookup() {
        let err = FlickrError::Api {
            code: 98,
            message: "Invalid auth token".into(),
        };
        assert_eq!(err.api_error_code(), Some(ApiErrorCodes::LoginFailed));
        let err = FlickrError::Api {
            code: 1,
            message: "Photo not found".into(),
        };
        assert_eq!(err.api_error_code(), None);
    }

    #[tokio::test]
    async fn call_goes_to_configured_service() {
        let transport = Recorder {
            response: r#"<rsp stat="ok"><user id="12037949754@N01"/></rsp>"#,
            ..Default::default()
        };
        let mut api = ApiClient::new(Creds::from_tokens("k", "s", None), transport.clone());
        api.endpoints.service = "http://localhost:8080/services".into();

        #[derive(serde::Deserialize)]
        struct Login {
            user: User,
        }
        #[derive(serde::Deserialize)]
        struct User {
            #[serde(rename = "@id")]
            id: String,
        }

        let login: Login = api
            .call("flickr.test.login", &ApiParams::new(), true)
            .await
            .unwrap();
        assert_eq!(login.user.id, "12037949754@N01");
        let urls = transport.urls.lock().unwrap();
        assert!(urls[0].starts_with("http://localhost:8080/services/rest/?"));
    }

    #[test]
    fn upload_request_is_signed() {
        let api = ApiClient::new(
            Creds::from_tokens("87337fd784", "sf97838dijd", Some("ase878723623")),
            Recorder::default(),
        );
        let mut fields = ApiParams::new();
        fields.insert("title".into(), "kitten".into());
        let before = fields.clone();

        let req = api.upload_request("kitten.jpg", b"1234", &fields).unwrap();
        assert_eq!(fields, before);
        assert_eq!(req.url, UPLOAD_URL);
        assert!(req.content_type.starts_with("multipart/form-data; boundary="));

        let mut expected = fields.clone();
        expected.insert("api_key".into(), "87337fd784".into());
        expected.insert("auth_token".into(), "ase878723623".into());
        expected.insert("async".into(), "1".into());
        let sig = sign("sf97838dijd", &expected);
        let body = String::from_utf8_lossy(&req.body);
        assert!(body.contains(&format!("name=\"api_sig\"\r\n\r\n{sig}\r\n")));
        assert!(body.contains("name=\"async\"\r\n\r\n1\r\n"));
        assert!(body.contains("name=\"photo\"; filename=\"kitten.jpg\""));
    }
}
