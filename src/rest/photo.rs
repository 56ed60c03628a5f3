/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::from_flag;
use crate::rest::{ApiParams, Client, HttpTransport, Size};
use async_stream::try_stream;
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::Deserialize;

/// Holds information returned for a photo in list style responses.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.search.html) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Photo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@owner")]
    pub owner: String,

    #[serde(rename = "@secret")]
    pub secret: String,

    #[serde(rename = "@server")]
    pub server: String,

    #[serde(rename = "@farm")]
    pub farm: String,

    #[serde(default, rename = "@title")]
    pub title: String,

    #[serde(default, rename = "@ispublic", deserialize_with = "from_flag")]
    pub is_public: bool,

    #[serde(default, rename = "@isprimary", deserialize_with = "from_flag")]
    pub is_primary: bool,

    // Present when the "url_t" extra is requested
    #[serde(default, rename = "@width_t")]
    pub thumbnail_width: Option<u32>,

    #[serde(default, rename = "@height_t")]
    pub thumbnail_height: Option<u32>,

    // Present when the "date_upload" extra is requested
    #[serde(
        default,
        rename = "@dateupload",
        with = "chrono::serde::ts_seconds_option"
    )]
    pub date_uploaded: Option<DateTime<Utc>>,
}

impl Photo {
    /// Returns the URL to this photo in the specified size
    pub fn url(&self, size: Size) -> String {
        match size {
            Size::Medium500 => format!(
                "http://farm{}.static.flickr.com/{}/{}_{}.jpg",
                self.farm, self.server, self.id, self.secret
            ),
            _ => {
                let suffix: &'static str = size.into();
                format!(
                    "http://farm{}.static.flickr.com/{}/{}_{}_{}.jpg",
                    self.farm, self.server, self.id, self.secret, suffix
                )
            }
        }
    }

    /// Width divided by height of the thumbnail, when both are known
    pub fn ratio(&self) -> Option<f64> {
        match (self.thumbnail_width, self.thumbnail_height) {
            (Some(w), Some(h)) if h > 0 => Some(f64::from(w) / f64::from(h)),
            _ => None,
        }
    }

    /// Retrieves one page of `flickr.photos.search` results
    pub async fn search_page<T: HttpTransport>(
        client: &Client<T>,
        params: &ApiParams,
        page: u32,
    ) -> Result<PhotoPage, FlickrError> {
        let mut args = params.clone();
        args.insert("page".into(), page.to_string());
        client
            .api_client
            .call::<SearchResponse>("flickr.photos.search", &args, true)
            .await
            .map(|v| v.photos)
    }

    /// Searches for photos and streams every result across all pages
    pub fn search<T: HttpTransport>(
        client: Client<T>,
        params: ApiParams,
    ) -> impl Stream<Item = Result<Photo, FlickrError>> {
        try_stream! {
            let mut page = 1;
            loop {
                let resp = Self::search_page(&client, &params, page).await?;
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

/// A single page of photos along with the paging information
#[derive(Deserialize, Debug)]
pub struct PhotoPage {
    #[serde(rename = "@page")]
    pub page: u32,

    #[serde(rename = "@pages")]
    pub pages: u32,

    #[serde(rename = "@perpage")]
    pub per_page: u32,

    #[serde(rename = "@total")]
    pub total: u64,

    #[serde(default, rename = "photo")]
    pub photos: Vec<Photo>,
}

// Expected response for a photo search
#[derive(Deserialize, Debug)]
struct SearchResponse {
    photos: PhotoPage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::decode_xml;

    const SEARCH: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
<photos page="2" pages="89" perpage="10" total="881">
    <photo id="2636" owner="47058503995@N01" secret="a123456" server="2" farm="1"
        title="test_04" ispublic="1" isfriend="0" isfamily="0"
        url_t="https://example.com/t.jpg" width_t="100" height_t="75"
        dateupload="1300335009" />
    <photo id="2635" owner="47058503995@N01" secret="b123456" server="2" farm="1"
        title="test_03" ispublic="0" isfriend="1" isfamily="1" />
</photos>
</rsp>"#;

    fn photo() -> Photo {
        Photo {
            id: "2636".into(),
            owner: "47058503995@N01".into(),
            secret: "a123456".into(),
            server: "2".into(),
            farm: "1".into(),
            title: "test_04".into(),
            is_public: true,
            is_primary: false,
            thumbnail_width: Some(100),
            thumbnail_height: Some(75),
            date_uploaded: DateTime::from_timestamp(1300335009, 0),
        }
    }

    #[test]
    fn search_response_decodes() {
        let resp: SearchResponse = decode_xml(SEARCH.as_bytes()).unwrap();
        let page = resp.photos;
        assert_eq!((page.page, page.pages, page.per_page, page.total), (2, 89, 10, 881));
        assert_eq!(page.photos.len(), 2);
        assert_eq!(page.photos[0], photo());

        let second = &page.photos[1];
        assert_eq!(second.id, "2635");
        assert!(!second.is_public);
        assert_eq!(second.thumbnail_width, None);
        assert_eq!(second.date_uploaded, None);
        assert_eq!(second.ratio(), None);
    }

    #[test]
    fn photo_urls() {
        let p = photo();
        assert_eq!(
            p.url(Size::Medium500),
            "http://farm1.static.flickr.com/2/2636_a123456.jpg"
        );
        assert_eq!(
            p.url(Size::Thumbnail),
            "http://farm1.static.flickr.com/2/2636_a123456_t.jpg"
        );
        assert_eq!(
            p.url(Size::Original),
            "http://farm1.static.flickr.com/2/2636_a123456_o.jpg"
        );
    }

    #[test]
    fn ratio_from_thumbnail() {
        let p = photo();
        assert!((p.ratio().unwrap() - 100.0 / 75.0).abs() < f64::EPSILON);

        let flat = Photo {
            thumbnail_height: Some(0),
            ..photo()
        };
        assert_eq!(flat.ratio(), None);
    }
}
