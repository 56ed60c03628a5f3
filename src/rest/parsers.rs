/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{Perms, TicketStatus};
use serde::Deserialize;
use std::str::FromStr;

// Parses permission names
pub fn from_perms<'de, D>(deserializer: D) -> Result<Perms, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Perms::from_str(&s).or(Ok(Perms::Unknown))
}

// Parses "0"/"1" flags
pub fn from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(s == "1")
}

// Parses the upload ticket completion code
pub fn from_ticket_status<'de, D>(deserializer: D) -> Result<Option<TicketStatus>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code: u8 = Deserialize::deserialize(deserializer)?;
    TicketStatus::try_from(code)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

// Parses strings that may be "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    if s.is_empty() { Ok(None) } else { Ok(Some(s)) }
}
