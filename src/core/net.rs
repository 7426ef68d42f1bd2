// src/core/net.rs
// Blocking HTTP GET with a browser User-Agent, a request timeout and bounded retries.

use std::thread;

use reqwest::blocking::Client;

use super::retry::{classify_status, ErrorKind, RetryDecision};
use crate::config::options::NetOptions;
use crate::error::ScrapeError;

pub fn build_client(net: &NetOptions) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(net.user_agent.clone())
        .timeout(net.timeout)
        .build()
}

/// Fetch `url` and return the body as text.
/// Retries according to `net.retry`; the last error is returned as `ScrapeError::Fetch`.
pub fn http_get(url: &str, net: &NetOptions) -> Result<String, ScrapeError> {
    let client = build_client(net).map_err(|source| ScrapeError::Fetch { url: s!(url), source })?;

    let mut attempt = 1u32;
    loop {
        logd!(url, attempt, "GET");
        let err = match get_once(&client, url) {
            Ok(body) => {
                logf!(url, bytes = body.len(), "fetched page");
                return Ok(body);
            }
            Err(e) => e,
        };

        let kind = classify(&err);
        match net.retry.decide(attempt, kind) {
            RetryDecision::RetryAfter(delay) => {
                logw!(url, attempt, ?kind, error = %err, "fetch failed, retrying in {delay:?}");
                thread::sleep(delay);
                attempt += 1;
            }
            RetryDecision::NoRetry => {
                loge!(url, attempt, ?kind, error = %err, "fetch failed");
                return Err(ScrapeError::Fetch { url: s!(url), source: err });
            }
        }
    }
}

fn get_once(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    client.get(url).send()?.error_for_status()?.text()
}

fn classify(e: &reqwest::Error) -> ErrorKind {
    if e.is_timeout() {
        ErrorKind::Timeout
    } else if let Some(status) = e.status() {
        classify_status(status.as_u16()).unwrap_or(ErrorKind::Other)
    } else if e.is_connect() {
        ErrorKind::Connection
    } else {
        ErrorKind::Other
    }
}

/// True when the URL carries every detailed-view marker.
pub fn looks_like_detailed_view(url: &str, markers: &[&str]) -> bool {
    markers.iter().all(|m| url.contains(m))
}
