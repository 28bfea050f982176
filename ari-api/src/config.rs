//! Connection settings for an ARI endpoint

/// Configuration for connecting to an Asterisk ARI endpoint
///
/// ARI authenticates with the credentials of an `ari.conf` user. This SDK
/// passes them as the `api_key` query parameter on every request, which is
/// the scheme ARI supports without extra headers.
#[derive(Debug, Clone)]
pub struct AriConfig {
    base_url: String,
    username: String,
    password: String,
    app_name: String,
}

impl AriConfig {
    /// Create a configuration for the given ARI base URL and credentials
    ///
    /// `base_url` includes the ARI prefix, e.g. `http://pbx:8088/ari`.
    /// A trailing slash is stripped so operation paths can be appended
    /// directly.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            username: username.into(),
            password: password.into(),
            app_name: "ari-sdk".to_string(),
        }
    }

    /// Set the Stasis application name this client acts for
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    /// The ARI base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The Stasis application name
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The `api_key` query value, `username:password`
    pub(crate) fn api_key(&self) -> String {
        format!("{}:{}", self.username, self.password)
    }
}
