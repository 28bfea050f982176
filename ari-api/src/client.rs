use rest_client::RestClient;

use crate::bridges::BridgesController;
use crate::config::AriConfig;
use crate::error::Result;
use crate::operation::AriOperation;
use crate::playbacks::PlaybacksController;
use crate::recordings::RecordingsController;

/// A client for executing ARI operations against an Asterisk server
///
/// This client bridges the gap between the stateless operation definitions
/// and actual network requests. It owns the connection configuration and the
/// underlying `rest-client` agent; cloning it is cheap and clones share the
/// HTTP connection pool.
///
/// Resource controllers group the operations for one ARI resource:
///
/// ```rust,no_run
/// use ari_api::{AriClient, AriConfig};
///
/// let client = AriClient::new(AriConfig::new("http://pbx:8088/ari", "user", "pass"));
/// client.bridges().destroy("conference-1")?;
/// # Ok::<(), ari_api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AriClient {
    rest: RestClient,
    config: AriConfig,
}

impl AriClient {
    /// Create a new ARI client for the given configuration
    pub fn new(config: AriConfig) -> Self {
        Self {
            rest: RestClient::new(),
            config,
        }
    }

    /// Create an ARI client with a custom REST client (for advanced use cases)
    ///
    /// Most applications should use `AriClient::new()` instead.
    pub fn with_rest_client(config: AriConfig, rest: RestClient) -> Self {
        Self { rest, config }
    }

    /// The connection configuration this client was built with
    pub fn config(&self) -> &AriConfig {
        &self.config
    }

    /// Execute an ARI operation
    ///
    /// Builds the full URL from the configured base URL and the operation's
    /// path, appends the operation's query parameters plus the `api_key`
    /// credential, issues exactly one request, and parses the response.
    /// Transport errors propagate unchanged; there are no retries here.
    pub fn execute<Op: AriOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        let url = format!("{}{}", self.config.base_url(), Op::path(request));
        let mut query = Op::query(request);
        query.push(("api_key", self.config.api_key()));

        tracing::debug!(method = Op::METHOD.as_str(), %url, "executing ARI operation");

        let body = self.rest.request(Op::METHOD, &url, &query)?;
        Op::parse_response(body.as_deref())
    }

    /// Controller for the `/bridges` resource
    pub fn bridges(&self) -> BridgesController<'_> {
        BridgesController::new(self)
    }

    /// Controller for the `/playbacks` resource
    pub fn playbacks(&self) -> PlaybacksController<'_> {
        PlaybacksController::new(self)
    }

    /// Controller for the `/recordings/live` resource
    pub fn recordings(&self) -> RecordingsController<'_> {
        RecordingsController::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = AriConfig::new("http://pbx:8088/ari", "user", "pass");
        let client = AriClient::new(config);
        assert_eq!(client.config().base_url(), "http://pbx:8088/ari");

        let config = AriConfig::new("http://pbx:8088/ari", "user", "pass");
        let _client = AriClient::with_rest_client(config, RestClient::new());
    }
}
