use console::{style, Attribute};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Error, Result};

/// Error body returned by an upstream API alongside a non-200 status.
pub trait RemoteError: DeserializeOwned {
    fn into_message(self) -> String;
}

pub struct Client {
    http: reqwest::blocking::Client,
    debug: bool,
}

impl Client {
    pub fn new(debug: bool) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            debug,
        }
    }

    /// Issues one GET and decodes the body as `T`, or as `E` when the status
    /// is anything but 200.
    pub fn get_json<T, E>(&self, url: &Url) -> Result<T>
    where
        T: DeserializeOwned,
        E: RemoteError,
    {
        let shown = redact(url);
        if self.debug {
            eprintln!("url: {}", style(&shown).attr(Attribute::Underlined));
        }
        tracing::debug!(url = %shown, "sending request");

        let resp = self.http.get(url.clone()).send()?;
        let status = resp.status();
        let body = resp.bytes()?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if status != reqwest::StatusCode::OK {
            let remote: E = serde_json::from_slice(&body)?;
            return Err(Error::Remote {
                status: status.as_u16(),
                message: remote.into_message(),
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Parses `base` and appends `segments` to its path, percent-escaping each.
/// `.` and `..` are refused, since url normalization would drop them.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url> {
    if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(Error::PathSegment(dot.to_string()));
    }
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| Error::BaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

// The api key travels in the query string; keep it out of logs.
fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "api_key") {
        return url.to_string();
    }
    let mut shown = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    shown.query_pairs_mut().clear().extend_pairs(pairs);
    shown.to_string()
}
