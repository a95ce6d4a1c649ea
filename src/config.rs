use std::fmt;
use std::time::Duration;

/// OAuth token endpoint of the Warcraft Logs API.
pub const DEFAULT_TOKEN_URL: &str = "https://www.warcraftlogs.com/oauth/token";

/// GraphQL endpoint for client-credentials access.
pub const DEFAULT_API_URL: &str = "https://www.warcraftlogs.com/api/v2/client";

/// Default timeout applied to every HTTP request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client-credentials pair used to obtain an access token.
///
/// Either half may be absent; an empty string is treated the same as a
/// missing value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Credentials {
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            client_id: client_id.filter(|s| !s.is_empty()),
            client_secret: client_secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .finish()
    }
}

/// The two remote endpoints the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub api_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_owned(),
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

/// Everything a [`WclClient`](crate::WclClient) needs at construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,
    pub timeout: Duration,
}

impl Config {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoints: Endpoints::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_are_absent() {
        let creds = Credentials::new(Some(String::new()), Some("secret".into()));
        assert_eq!(creds.client_id(), None);
        assert_eq!(creds.client_secret(), Some("secret"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = Credentials::new(Some("id".into()), Some("hunter2".into()));
        let debug = format!("{creds:?}");
        assert!(debug.contains("id"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_default_endpoints() {
        let config = Config::new(Credentials::default());
        assert_eq!(config.endpoints.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.endpoints.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
