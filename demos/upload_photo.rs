/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use flickr::rest::{Client, Creds, Perms, Ticket, TicketStatus, UploadProps};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let mut client = Client::new(Creds::from_tokens(&api_key, &api_secret, None));

    // Without a token, walk through the frob exchange first
    let auth_token = match std::env::var("FLICKR_AUTH_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            let frob = std::env::var("FLICKR_FROB").with_context(|| {
                format!(
                    "Set FLICKR_FROB after authorising at {}",
                    client.auth_url(Perms::Write)
                )
            })?;
            let token = client.get_token(&frob).await?;
            println!("Authorised as {} (save FLICKR_AUTH_TOKEN={})", token.user.user_name, token.token);
            token.token
        }
    };
    client.set_auth_token(Some(&auth_token));

    let path: PathBuf = std::env::args()
        .nth(1)
        .context("usage: upload_photo <file>")?
        .into();
    let filename = path
        .file_name()
        .and_then(|f| f.to_str())
        .context("file name is not valid UTF-8")?
        .to_string();
    let data = std::fs::read(&path)?;

    let props = UploadProps {
        title: Some(filename.clone()),
        is_public: Some(false),
        ..Default::default()
    };
    let ticket_id = client.upload(&filename, &data, &props).await?;
    println!("Upload ticket: {ticket_id}");

    loop {
        let tickets = Ticket::check(&client, &[ticket_id.as_str()]).await?;
        let ticket = tickets.first().context("ticket missing from response")?;
        if ticket.invalid {
            anyhow::bail!("Ticket {} is not valid", ticket.id);
        }
        match ticket.status {
            Some(TicketStatus::Complete) => {
                println!("Photo id: {:?}", ticket.photo_id);
                break;
            }
            Some(TicketStatus::Failed) => anyhow::bail!("Upload processing failed"),
            _ => tokio::time::sleep(Duration::from_secs(2)).await,
        }
    }
    Ok(())
}
