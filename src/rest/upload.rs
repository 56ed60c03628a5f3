/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::{from_empty_str_to_none, from_flag, from_ticket_status};
use crate::rest::{ApiParams, Client, HttpTransport, TicketStatus};
use serde::Deserialize;

/// Properties that can be sent along with an upload
#[derive(Default, Debug, Clone)]
pub struct UploadProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub is_public: Option<bool>,
    pub is_friend: Option<bool>,
    pub is_family: Option<bool>,
    pub hidden: Option<bool>,
}

impl UploadProps {
    /// Converts into the form fields the upload endpoint expects
    pub fn to_params(&self) -> ApiParams {
        let mut params = ApiParams::new();
        let flag = |v: bool| if v { "1" } else { "0" }.to_string();
        if let Some(title) = &self.title {
            params.insert("title".into(), title.clone());
        }
        if let Some(description) = &self.description {
            params.insert("description".into(), description.clone());
        }
        if !self.tags.is_empty() {
            let tags: Vec<String> = self
                .tags
                .iter()
                .map(|t| if t.contains(' ') { format!("\"{t}\"") } else { t.clone() })
                .collect();
            params.insert("tags".into(), tags.join(" "));
        }
        if let Some(v) = self.is_public {
            params.insert("is_public".into(), flag(v));
        }
        if let Some(v) = self.is_friend {
            params.insert("is_friend".into(), flag(v));
        }
        if let Some(v) = self.is_family {
            params.insert("is_family".into(), flag(v));
        }
        if let Some(v) = self.hidden {
            // 1 keeps the photo in global search results, 2 hides it
            params.insert("hidden".into(), if v { "2" } else { "1" }.to_string());
        }
        params
    }
}

impl<T: HttpTransport> Client<T> {
    /// Uploads a photo and returns the ticket id for the asynchronous upload.
    ///
    /// Use [`Ticket::check`] to find out when processing is done.
    pub async fn upload(
        &self,
        filename: &str,
        photo: &[u8],
        props: &UploadProps,
    ) -> Result<String, FlickrError> {
        let req = self
            .api_client
            .upload_request(filename, photo, &props.to_params())?;
        self.api_client
            .post::<UploadResponse>(req)
            .await
            .map(|v| v.ticket_id)
    }
}

/// Status of an asynchronous upload.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.upload.checkTickets.html)
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Ticket {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(
        default,
        rename = "@complete",
        deserialize_with = "from_ticket_status"
    )]
    pub status: Option<TicketStatus>,

    #[serde(default, rename = "@photoid", deserialize_with = "from_empty_str_to_none")]
    pub photo_id: Option<String>,

    #[serde(default, rename = "@invalid", deserialize_with = "from_flag")]
    pub invalid: bool,
}

impl Ticket {
    /// Checks the processing state of the given upload tickets
    pub async fn check<T: HttpTransport>(
        client: &Client<T>,
        ticket_ids: &[&str],
    ) -> Result<Vec<Ticket>, FlickrError> {
        if ticket_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut params = ApiParams::new();
        params.insert("tickets".into(), ticket_ids.join(","));
        client
            .api_client
            .call::<CheckTicketsResponse>("flickr.photos.upload.checkTickets", &params, false)
            .await
            .map(|v| v.uploader.tickets)
    }
}

// Expected response for an asynchronous upload
#[derive(Deserialize, Debug)]
struct UploadResponse {
    #[serde(rename = "ticketid")]
    ticket_id: String,
}

#[derive(Deserialize, Debug)]
struct Uploader {
    #[serde(default, rename = "ticket")]
    tickets: Vec<Ticket>,
}

// Expected response for a checkTickets request
#[derive(Deserialize, Debug)]
struct CheckTicketsResponse {
    uploader: Uploader,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::decode_xml;

    #[test]
    fn props_to_params() {
        let props = UploadProps {
            title: Some("kitten".into()),
            tags: vec!["cat".into(), "cute kitten".into()],
            is_public: Some(false),
            hidden: Some(true),
            ..Default::default()
        };
        let params = props.to_params();
        assert_eq!(params.len(), 4);
        assert_eq!(params["title"], "kitten");
        assert_eq!(params["tags"], "cat \"cute kitten\"");
        assert_eq!(params["is_public"], "0");
        assert_eq!(params["hidden"], "2");
        assert!(UploadProps::default().to_params().is_empty());
    }

    #[test]
    fn upload_response_decodes() {
        let resp: UploadResponse =
            decode_xml(br#"<rsp stat="ok"><ticketid>1415</ticketid></rsp>"#).unwrap();
        assert_eq!(resp.ticket_id, "1415");
    }

    #[test]
    fn check_tickets_response_decodes() {
        let xml = r#"<rsp stat="ok">
<uploader>
    <ticket id="128" complete="1" photoid="2995" />
    <ticket id="129" complete="0" />
    <ticket id="130" complete="2" />
    <ticket id="131" invalid="1" />
</uploader>
</rsp>"#;
        let resp: CheckTicketsResponse = decode_xml(xml.as_bytes()).unwrap();
        let tickets = resp.uploader.tickets;
        assert_eq!(tickets.len(), 4);
        assert_eq!(tickets[0].status, Some(TicketStatus::Complete));
        assert_eq!(tickets[0].photo_id.as_deref(), Some("2995"));
        assert_eq!(tickets[1].status, Some(TicketStatus::Pending));
        assert_eq!(tickets[2].status, Some(TicketStatus::Failed));
        assert!(tickets[3].invalid);
        assert_eq!(tickets[3].status, None);
    }
}
