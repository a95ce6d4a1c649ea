use tracing::instrument;

use crate::config::{Config, Credentials, Endpoints};
use crate::error::{RankingsError, Result};
use crate::model::{AccessToken, EncounterRankings, RankingsQuery};
use crate::wcl;

/// The main entry point for talking to the Warcraft Logs API.
///
/// `WclClient` wraps a [`reqwest::Client`] together with the credentials and
/// endpoints it was configured with. Nothing is read from the process
/// environment here.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> wcl_rankings::Result<()> {
/// use wcl_rankings::{Config, Credentials, RankingsQuery, WclClient};
///
/// let credentials = Credentials::new(Some("id".into()), Some("secret".into()));
/// let client = WclClient::new(Config::new(credentials))?;
/// let token = client.get_access_token().await?;
/// let response = client
///     .get_character_rankings(&token, &RankingsQuery::default())
///     .await?;
/// let encounter = WclClient::parse_rankings_response(&response)?;
/// println!("Found {} rankings", encounter.rankings.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WclClient {
    http: reqwest::Client,
    credentials: Credentials,
    endpoints: Endpoints,
}

impl WclClient {
    /// Create a client from `config`, applying its request timeout.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wcl-rankings/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(RankingsError::HttpClient)?;
        Ok(Self::with_client(http, config))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// The timeout in `config` is ignored; configure it on `http` instead.
    pub fn with_client(http: reqwest::Client, config: Config) -> Self {
        Self {
            http,
            credentials: config.credentials,
            endpoints: config.endpoints,
        }
    }

    /// Exchange the configured client credentials for a bearer token.
    #[instrument(skip(self))]
    pub async fn get_access_token(&self) -> Result<AccessToken> {
        wcl::auth::get_access_token(&self.http, &self.endpoints.token_url, &self.credentials).await
    }

    /// Run the character rankings query and return the undecoded response.
    #[instrument(skip(self, token))]
    pub async fn get_character_rankings(
        &self,
        token: &AccessToken,
        query: &RankingsQuery,
    ) -> Result<serde_json::Value> {
        wcl::rankings::get_character_rankings(&self.http, &self.endpoints.api_url, token, query)
            .await
    }

    /// Extract the encounter name and top rankings from a raw response.
    pub fn parse_rankings_response(response: &serde_json::Value) -> Result<EncounterRankings> {
        wcl::extract::parse_rankings_response(response)
    }
}
