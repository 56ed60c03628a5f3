/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This Flickr library was created for working with the Flickr REST API.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Request signing with the application secret
//! - Authorisation URL and frob to token exchange
//! - Photo search (streams every page of results)
//! - Photoset listing and photoset contents
//! - Photo upload and upload ticket checking
//! - Lower level interface for calling any REST method and decoding the
//!   response into your own types
//!
//! *Responses are decoded in two steps. The `<rsp stat="...">` envelope is
//! checked first and a service failure comes back as
//! [`rest::FlickrError::Api`] with the code and message Flickr reported. Only
//! successful responses are decoded into the requested type.*
//!
//! *HTTP is done through the [`rest::HttpTransport`] trait. [`rest::ReqwestTransport`]
//! is used by default; supply your own to control timeouts, proxies or testing.*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.3.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust
//! use flickr::rest::{ApiParams, Client, Creds, Photo, Size};
//! use futures::{pin_mut, StreamExt};
//!
//! async fn print_photo_urls(
//!     api_key: &str,
//!     api_secret: &str,
//!     auth_token: Option<&str>,
//! ) -> anyhow::Result<()> {
//!     // The auth token is obtained via the frob exchange (see Client::get_token)
//!     let client = Client::new(Creds::from_tokens(api_key, api_secret, auth_token));
//!
//!     let mut params = ApiParams::new();
//!     params.insert("text".into(), "kitten".into());
//!     params.insert("extras".into(), "url_t".into());
//!
//!     let photos = Photo::search(client.clone(), params);
//!     pin_mut!(photos);
//!     while let Some(photo) = photos.next().await {
//!         println!("{}", photo?.url(Size::Medium640));
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod rest;
