/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::Creds;
use std::collections::HashMap;

/// Request arguments keyed by parameter name
pub type ApiParams = HashMap<String, String>;

/// Returns the API signature for the given arguments.
///
/// The digest is taken over the secret followed by every `key + value` pair in
/// ascending key order. Values are hashed raw, before any query escaping, so
/// the insertion order of `params` never affects the result.
pub fn sign(secret: &str, params: &ApiParams) -> String {
    let mut keys: Vec<&String> = params.keys().collect();
    keys.sort();

    let mut data = Vec::with_capacity(secret.len() + params.len() * 16);
    data.extend_from_slice(secret.as_bytes());
    for key in keys {
        data.extend_from_slice(key.as_bytes());
        data.extend_from_slice(params[key].as_bytes());
    }
    format!("{:x}", md5::compute(data))
}

/// Returns a signed URL of the form `{service}/{path}/?{query}`.
///
/// `params` is cloned before `api_key` and `api_sig` are added so the caller's
/// map is left untouched.
pub fn signed_url(service: &str, path: &str, creds: &Creds, params: &ApiParams) -> String {
    let mut args = params.clone();
    args.insert("api_key".into(), creds.api_key.clone());
    let sig = sign(&creds.secret, &args);
    args.insert("api_sig".into(), sig);
    format!("{service}/{path}/?{}", encode_query(&args))
}

/// Returns the URL for invoking `method` with the supplied arguments.
///
/// Authenticated calls carry the auth token (when there is one) and are signed
/// with the shared secret. Unauthenticated calls are neither.
pub fn build_url(
    service: &str,
    path: &str,
    creds: &Creds,
    method: &str,
    params: &ApiParams,
    authenticated: bool,
) -> String {
    let mut args = params.clone();
    args.insert("method".into(), method.into());
    if authenticated {
        if let Some(token) = &creds.auth_token {
            args.insert("auth_token".into(), token.clone());
        }
        signed_url(service, path, creds, &args)
    } else {
        args.insert("api_key".into(), creds.api_key.clone());
        format!("{service}/{path}/?{}", encode_query(&args))
    }
}

/// Form encodes the arguments. Key order is not significant to the service.
pub(crate) fn encode_query(params: &ApiParams) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Strips the auth token and signature values from a URL before it is logged
pub(crate) fn redact_url(url: &str) -> String {
    let Ok(mut parsed) = url::Url::parse(url) else {
        return url.to_string();
    };
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| match k.as_ref() {
            "auth_token" | "api_sig" => (k.into_owned(), "xxx".to_string()),
            _ => (k.into_owned(), v.into_owned()),
        })
        .collect();
    if pairs.is_empty() {
        return url.to_string();
    }
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.into()
}
