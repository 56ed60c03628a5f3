/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod auth;
pub mod client;
pub mod decode;
pub mod errors;
pub mod multipart;
mod parsers;
pub mod photo;
pub mod photoset;
pub mod properties;
pub mod sign;
pub mod transport;
pub mod upload;

pub use api::*;
pub use auth::*;
pub use client::*;
pub use decode::*;
pub use errors::*;
pub use multipart::*;
pub use photo::*;
pub use photoset::*;
pub use properties::*;
pub use sign::*;
pub use transport::*;
pub use upload::*;
