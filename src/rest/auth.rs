/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::from_perms;
use crate::rest::{ApiParams, Client, HttpTransport, Perms};
use serde::Deserialize;

/// Token returned from `flickr.auth.getToken`
#[derive(Deserialize, Debug, Clone)]
pub struct AuthToken {
    pub token: String,

    #[serde(deserialize_with = "from_perms")]
    pub perms: Perms,

    pub user: AuthUser,
}

/// User the token acts on behalf of
#[derive(Deserialize, Debug, Clone)]
pub struct AuthUser {
    #[serde(rename = "@nsid")]
    pub nsid: String,

    #[serde(rename = "@username")]
    pub user_name: String,

    #[serde(default, rename = "@fullname")]
    pub full_name: String,
}

impl<T: HttpTransport> Client<T> {
    /// Returns the URL for requesting authorisation to access the user's
    /// account with the given permission level.
    ///
    /// See [Flickr Auth Spec](https://www.flickr.com/services/api/auth.spec.html)
    pub fn auth_url(&self, perms: Perms) -> String {
        let mut params = ApiParams::new();
        let perms: &'static str = perms.into();
        params.insert("perms".into(), perms.into());
        self.api_client.auth_url(&params)
    }

    /// Exchanges a temporary frob for a token that's valid forever
    pub async fn get_token(&self, frob: &str) -> Result<AuthToken, FlickrError> {
        let mut params = ApiParams::new();
        params.insert("frob".into(), frob.into());
        self.api_client
            .call::<TokenResponse>("flickr.auth.getToken", &params, true)
            .await
            .map(|v| v.auth)
    }
}

// Expected response from a getToken request
#[derive(Deserialize, Debug)]
struct TokenResponse {
    auth: AuthToken,
}
