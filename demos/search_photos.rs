/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::Result;
use dotenvy::dotenv;
use flickr::rest::{ApiParams, Client, Creds, Photo, PhotoSet, Size};
use futures::{pin_mut, StreamExt};

// Prints the first `limit` photos matching `text`
async fn search(client: &Client, text: &str, limit: usize) -> Result<()> {
    let mut params = ApiParams::new();
    params.insert("text".into(), text.into());
    params.insert("extras".into(), "url_t,date_upload".into());

    let photos = Photo::search(client.clone(), params);
    pin_mut!(photos);
    let mut count = 0;
    while let Some(photo) = photos.next().await {
        let photo = photo?;
        println!(
            "{} \"{}\" ratio:{:?} {}",
            photo.id,
            photo.title,
            photo.ratio(),
            photo.url(Size::Medium640)
        );
        count += 1;
        if count >= limit {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The API key/secret is obtained from your Flickr account.
    // An auth token is only needed to see private photos and sets.
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let auth_token = std::env::var("FLICKR_AUTH_TOKEN").ok();

    let client = Client::new(Creds::from_tokens(
        &api_key,
        &api_secret,
        auth_token.as_deref(),
    ));

    let text = std::env::args().nth(1).unwrap_or_else(|| "kitten".to_string());
    search(&client, &text, 20).await?;

    if auth_token.is_some() {
        for set in PhotoSet::list(&client, None).await? {
            println!("Photoset {}: {} ({} photos)", set.id, set.title, set.photo_count);
        }
    }
    Ok(())
}
