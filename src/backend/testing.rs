//! In-memory transport for tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Url;

use super::api::{HttpReply, Transport};
use super::error::SearchError;

/// Replays one canned outcome and records every request it receives
pub struct FakeTransport {
    outcome: Result<HttpReply, SearchError>,
    requests: Mutex<Vec<(Url, String)>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(HttpReply {
                status,
                body: body.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(SearchError::Request(reason.to_string())),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<(Url, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn post_json(&self, url: Url, body: String) -> Result<HttpReply, SearchError> {
        self.requests.lock().unwrap().push((url, body));
        self.outcome.clone()
    }
}

/// Response body with one candidate and the given `(title, uri)` attributions
pub fn answer_body(answer: &str, sources: &[(Option<&str>, Option<&str>)]) -> String {
    let attributions: Vec<_> = sources
        .iter()
        .map(|(title, uri)| serde_json::json!({ "web": { "title": title, "uri": uri } }))
        .collect();

    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": answer }] },
            "groundingMetadata": { "groundingAttributions": attributions }
        }]
    })
    .to_string()
}
