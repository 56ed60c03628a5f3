/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::{ApiParams, Client, HttpTransport, Photo};
use async_stream::try_stream;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::Deserialize;

/// Holds information returned from the Photosets API.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photosets.getList.html) for
/// more details on the individual fields.
#[derive(Deserialize, Debug, Clone)]
pub struct PhotoSet {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@primary")]
    pub primary: Option<String>,

    #[serde(default, rename = "@photos")]
    pub photo_count: u32,

    #[serde(default, rename = "@videos")]
    pub video_count: u32,

    #[serde(
        default,
        rename = "@date_create",
        with = "chrono::serde::ts_seconds_option"
    )]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(
        default,
        rename = "@date_update",
        with = "chrono::serde::ts_seconds_option"
    )]
    pub date_updated: Option<DateTime<Utc>>,

    pub title: String,

    #[serde(default)]
    pub description: String,
}

impl PhotoSet {
    /// Returns the photosets belonging to `user_id`, or to the authenticated
    /// user when no id is given
    pub async fn list<T: HttpTransport>(
        client: &Client<T>,
        user_id: Option<&str>,
    ) -> Result<Vec<PhotoSet>, FlickrError> {
        let mut params = ApiParams::new();
        if let Some(user_id) = user_id {
            params.insert("user_id".into(), user_id.into());
        }
        client
            .api_client
            .call::<PhotoSetsResponse>("flickr.photosets.getList", &params, true)
            .await
            .map(|v| v.photosets.photosets)
    }

    /// Streams the photos contained in the photoset with the given id
    pub fn photos<T: HttpTransport>(
        client: Client<T>,
        photoset_id: &str,
    ) -> impl Stream<Item = Result<Photo, FlickrError>> {
        let mut params = ApiParams::new();
        params.insert("photoset_id".into(), photoset_id.into());

        try_stream! {
            let mut page: u32 = 1;
            loop {
                let mut args = params.clone();
                args.insert("page".into(), page.to_string());
                let resp = client
                    .api_client
                    .call::<PhotoSetPhotosResponse>("flickr.photosets.getPhotos", &args, true)
                    .await?
                    .photoset;
                let is_done = resp.photos.is_empty() || page >= resp.pages;

                for photo in resp.photos {
                    yield photo
                }

                if is_done {
                    break;
                }
                page += 1;
            }
        }
    }
}

#[derive(Deserialize, Debug)]
struct PhotoSetList {
    #[serde(default, rename = "photoset")]
    photosets: Vec<PhotoSet>,
}

// Expected response for a getList request
#[derive(Deserialize, Debug)]
struct PhotoSetsResponse {
    photosets: PhotoSetList,
}

#[derive(Deserialize, Debug)]
struct PhotoSetPhotos {
    #[serde(default = "one", rename = "@pages")]
    pages: u32,

    #[serde(default, rename = "photo")]
    photos: Vec<Photo>,
}

fn one() -> u32 {
    1
}

// Expected response for a getPhotos request
#[derive(Deserialize, Debug)]
struct PhotoSetPhotosResponse {
    photoset: PhotoSetPhotos,
}
