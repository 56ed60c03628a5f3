/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use bytes::Bytes;
use flickr::rest::{BodyStream, BoxError, Creds, HttpTransport, UploadRequest};
use futures::{stream, StreamExt};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub(crate) const API_KEY: &str = "87337fd784";
#[allow(dead_code)]
pub(crate) const SECRET: &str = "sf97838dijd";

/// Request as seen by the fake service
#[derive(Debug, Clone)]
pub(crate) enum Seen {
    Get(String),
    Post(UploadRequest),
}

/// Replays canned bodies in order and records every request
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    responses: Arc<Mutex<VecDeque<Result<String, &'static str>>>>,
    pub(crate) seen: Arc<Mutex<Vec<Seen>>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub(crate) fn replying<S: AsRef<str>>(bodies: &[S]) -> Self {
        let fake = Self::default();
        for body in bodies {
            fake.responses
                .lock()
                .unwrap()
                .push_back(Ok(body.as_ref().to_string()));
        }
        fake
    }

    pub(crate) fn failing(msg: &'static str) -> Self {
        let fake = Self::default();
        fake.responses.lock().unwrap().push_back(Err(msg));
        fake
    }

    pub(crate) fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    fn next(&self) -> Result<BodyStream, BoxError> {
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err("no canned response left"));
        match next {
            Ok(body) => {
                // Hand the body over in small chunks like a real socket would.
                let chunks: Vec<Result<Bytes, BoxError>> = body
                    .as_bytes()
                    .chunks(16)
                    .map(|c| Ok(Bytes::copy_from_slice(c)))
                    .collect();
                Ok(stream::iter(chunks).boxed())
            }
            Err(msg) => Err(msg.into()),
        }
    }
}

impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> Result<BodyStream, BoxError> {
        self.seen.lock().unwrap().push(Seen::Get(url.to_string()));
        self.next()
    }

    async fn post(&self, request: UploadRequest) -> Result<BodyStream, BoxError> {
        self.seen.lock().unwrap().push(Seen::Post(request));
        self.next()
    }
}

#[allow(dead_code)]
pub(crate) fn test_creds(auth_token: Option<&str>) -> Creds {
    Creds::from_tokens(API_KEY, SECRET, auth_token)
}

#[allow(dead_code)]
pub(crate) fn query_of(url: &str) -> HashMap<String, String> {
    url::Url::parse(url)
        .unwrap()
        .query_pairs()
        .into_owned()
        .collect()
}

#[allow(dead_code)]
pub(crate) fn get_live_creds() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let auth_token = std::env::var("FLICKR_AUTH_TOKEN").ok();

    Ok(Creds::from_tokens(
        &api_key,
        &api_secret,
        auth_token.as_deref(),
    ))
}
