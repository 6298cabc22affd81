//! HTTP client for the generative search API

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info};

use super::error::SearchError;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, SearchResult, Tool};
use crate::config::Config;

/// Raw HTTP reply handed back by a [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body and returns the raw reply.
///
/// Status handling and decoding belong to [`SearchClient`], so a transport
/// only fails when no reply arrived at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: Url, body: String) -> Result<HttpReply, SearchError>;
}

/// `reqwest` backed transport
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, SearchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: Url, body: String) -> Result<HttpReply, SearchError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

/// Trim-checks a query; the query itself is sent untrimmed.
pub fn validate_query(query: &str) -> Result<(), SearchError> {
    if query.trim().is_empty() {
        Err(SearchError::Validation)
    } else {
        Ok(())
    }
}

/// Copy of `url` with the `key` query value masked, whatever its encoding
fn redacted(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            let value = if name == "key" { "***".into() } else { value };
            (name.into_owned(), value.into_owned())
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked
}

/// Client for the `generateContent` endpoint with search grounding enabled
#[derive(Clone)]
pub struct SearchClient {
    transport: Arc<dyn Transport>,
    endpoint: String,
    model: String,
    api_key: String,
    system_prompt: String,
}

impl SearchClient {
    /// Client over the real HTTP transport
    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        let transport = HttpTransport::new(config.timeout())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: &Config, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// Payload embedding the query, the persona and the search tool
    pub fn build_request(&self, query: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::text(query)],
            tools: vec![Tool::default()],
            system_instruction: Content::text(self.system_prompt.as_str()),
        }
    }

    fn request_url(&self) -> Result<Url, SearchError> {
        let base = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        Url::parse_with_params(&base, &[("key", self.api_key.as_str())])
            .map_err(|e| SearchError::Request(format!("invalid endpoint {}: {}", base, e)))
    }

    /// Run one grounded search and shape the response
    pub async fn run_search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let url = self.request_url()?;
        let body = serde_json::to_string(&self.build_request(query))?;

        debug!("Sending search request to {}", redacted(&url));

        let reply = self.transport.post_json(url, body).await?;
        debug!("Search API response status: {}", reply.status);

        if !reply.is_success() {
            return Err(SearchError::Request(format!(
                "API error! Status: {}",
                reply.status
            )));
        }

        let response: GenerateContentResponse = serde_json::from_str(&reply.body)?;
        let answer = response.answer().ok_or(SearchError::EmptyAnswer)?.to_string();

        let attributions = response.attributions();
        let sources: Vec<_> = attributions.iter().filter_map(|a| a.to_source()).collect();
        if sources.len() < attributions.len() {
            debug!(
                "Dropped {} incomplete citation(s)",
                attributions.len() - sources.len()
            );
        }

        info!("Search answered with {} source(s)", sources.len());
        Ok(SearchResult { answer, sources })
    }
}
