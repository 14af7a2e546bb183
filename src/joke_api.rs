//! Client for the public random joke API.
//!
//! This module provides:
//!
//! - `Joke`: the deserialized API payload, also used as the favorites storage format
//! - `FetchError`: every way a fetch can fail
//! - `JokeSource`: the seam the fetcher is written against
//! - `JokeClient`: the reqwest-backed `JokeSource`

use serde::{Deserialize, Serialize};
use std::future::Future;

/// Default joke API base URL
pub const DEFAULT_BASE_URL: &str = "https://official-joke-api.appspot.com";

/// Endpoint path for a single random joke
const RANDOM_JOKE_PATH: &str = "/random_joke";

/// User agent for API requests
const USER_AGENT: &str = concat!("Jokebox/", env!("CARGO_PKG_VERSION"));

/// A joke as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// Text placed on the clipboard by "Copy"
    pub fn clipboard_text(&self) -> String {
        format!("{} - {}", self.setup, self.punchline)
    }
}

/// Why a joke fetch failed. Only logged; the user sees a fixed message.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("fetch task failed: {0}")]
    TaskFailed(String),
}

/// Anything that can produce a random joke
pub trait JokeSource: Clone + Send + Sync + 'static {
    fn random_joke(&self) -> impl Future<Output = Result<Joke, FetchError>> + Send;
}

/// HTTP client for the joke API
#[derive(Clone)]
pub struct JokeClient {
    client: reqwest::Client,
    base_url: String,
}

impl JokeClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the random joke endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, RANDOM_JOKE_PATH)
    }

    /// Host name shown as the source attribution
    pub fn source_host(&self) -> &str {
        let without_scheme = self
            .base_url
            .split_once("://")
            .map_or(self.base_url.as_str(), |(_, rest)| rest);
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }
}

impl JokeSource for JokeClient {
    async fn random_joke(&self) -> Result<Joke, FetchError> {
        let url = self.endpoint();
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_joke(&body)
    }
}

/// Decode a response body into a joke
pub fn parse_joke(body: &[u8]) -> Result<Joke, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_body() {
        let joke = parse_joke(
            br#"{"type":"general","setup":"S","punchline":"P","id":1}"#,
        )
        .unwrap();
        assert_eq!(
            joke,
            Joke {
                id: 1,
                kind: "general".to_string(),
                setup: "S".to_string(),
                punchline: "P".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_missing_field_is_malformed() {
        let err = parse_joke(br#"{"id":1,"type":"general","setup":"S"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_parse_non_json_is_malformed() {
        let err = parse_joke(b"<html>Service Unavailable</html>").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_serialized_field_names() {
        let joke = Joke {
            id: 7,
            kind: "programming".to_string(),
            setup: "a".to_string(),
            punchline: "b".to_string(),
        };
        let value = serde_json::to_value(&joke).unwrap();
        assert_eq!(value["type"], "programming");
        assert_eq!(value["id"], 7);
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_clipboard_text() {
        let joke = parse_joke(br#"{"id":1,"type":"general","setup":"S","punchline":"P"}"#).unwrap();
        assert_eq!(joke.clipboard_text(), "S - P");
    }

    #[test]
    fn test_endpoint_and_source_host() {
        let client = JokeClient::new("https://official-joke-api.appspot.com/").unwrap();
        assert_eq!(
            client.endpoint(),
            "https://official-joke-api.appspot.com/random_joke"
        );
        assert_eq!(client.source_host(), "official-joke-api.appspot.com");
    }
}
