//! Private REST client for Asterisk ARI communication
//!
//! This crate provides a minimal synchronous HTTP client specifically
//! designed for talking to the Asterisk REST Interface. ARI carries
//! operation arguments in the URL query string and signals failures through
//! HTTP status codes, so the surface here is one request method plus a
//! status-to-error mapping.

mod error;

pub use error::HttpError;

use std::time::Duration;

/// HTTP methods used by the ARI endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    /// The method name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A minimal REST client for ARI communication
#[derive(Debug, Clone)]
pub struct RestClient {
    agent: ureq::Agent,
}

impl RestClient {
    /// Create a new REST client with default configuration
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
        }
    }

    /// Issue a request and return the response body, if any
    ///
    /// Query pairs are appended to the URL. A 2xx response with a body
    /// yields `Ok(Some(body))`; an empty 2xx response (ARI's "void"
    /// operations return 204) yields `Ok(None)`. Error statuses are mapped
    /// through [`HttpError::from_status`], surfacing the server's JSON
    /// `message` field when one is present.
    pub fn request(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Option<String>, HttpError> {
        let mut req = self.agent.request(method.as_str(), url);
        for (name, value) in query {
            req = req.query(name, value);
        }

        match req.call() {
            Ok(response) => {
                let body = response
                    .into_string()
                    .map_err(|e| HttpError::Network(e.to_string()))?;
                if body.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(body))
                }
            }
            Err(ureq::Error::Status(code, response)) => {
                let message = response
                    .into_string()
                    .ok()
                    .and_then(|body| extract_message(&body))
                    .unwrap_or_default();
                Err(HttpError::from_status(code, message))
            }
            Err(e) => Err(HttpError::Network(e.to_string())),
        }
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the `message` field out of an ARI error body
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
