use std::path::PathBuf;

/// All errors that can occur while fetching and publishing rankings.
#[derive(thiserror::Error, Debug)]
pub enum RankingsError {
    /// A credential or bearer token needed for a request was not provided.
    #[error("authentication unavailable: {what} is missing")]
    MissingCredentials { what: &'static str },

    /// The token endpoint answered with a non-success status.
    #[error("authentication rejected with status {status}: {body}")]
    AuthRejected {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The GraphQL endpoint answered with a non-success status.
    #[error("rankings query rejected with status {status}: {body}")]
    QueryRejected {
        status: reqwest::StatusCode,
        body: String,
    },

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("network error for {url}: {source}")]
    Network {
        url: String,
        source: reqwest::Error,
    },

    /// A successful response carried a body we could not make sense of.
    #[error("malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    /// The response has no `data.worldData.encounter` object.
    #[error("could not find encounter data in the API response")]
    MissingEncounterData,

    /// The encounter carries no `characterRankings` payload.
    #[error("no character rankings found in the API response")]
    NoRankingsFound,

    /// The embedded `characterRankings` document failed to decode.
    #[error("malformed characterRankings payload: {0}")]
    MalformedRankingsPayload(#[from] serde_json::Error),

    /// Writing the rendered table failed.
    #[error("failed to write rankings to {path:?}: {source}")]
    OutputWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl RankingsError {
    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        RankingsError::Network {
            url: url.to_owned(),
            source,
        }
    }

    pub(crate) fn malformed(url: &str, reason: impl Into<String>) -> Self {
        RankingsError::MalformedResponse {
            url: url.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RankingsError>;
