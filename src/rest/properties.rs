/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::TryFromPrimitive;
use strum_macros::{EnumString, IntoStaticStr};

/// Permission levels an application can ask the user for.
///
/// See [Flickr Auth Spec](https://www.flickr.com/services/api/auth.spec.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Perms {
    Unknown,
    Read,
    Write,
    Delete,
}

/// Image sizes served by the static photo hosts.
///
/// See [Flickr Photo URLs](https://www.flickr.com/services/api/misc.urls.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Size {
    #[strum(serialize = "s")]
    SmallSquare,
    #[strum(serialize = "t")]
    Thumbnail,
    #[strum(serialize = "m")]
    Small,
    #[strum(serialize = "-")]
    Medium500,
    #[strum(serialize = "z")]
    Medium640,
    #[strum(serialize = "b")]
    Large,
    #[strum(serialize = "o")]
    Original,
}

/// Wire format requested from the REST endpoint
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Xml,
    /// Legacy `jsonFlickrApi(...)` responses
    Json,
}

/// Processing state of an asynchronous upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum TicketStatus {
    Pending = 0,
    Complete = 1,
    Failed = 2,
}
