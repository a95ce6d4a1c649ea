use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::Credentials;
use crate::error::{RankingsError, Result};
use crate::model::AccessToken;
use crate::wcl;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Exchange client credentials for a bearer token.
///
/// Fails with [`RankingsError::MissingCredentials`] before touching the
/// network when either half of the pair is absent.
#[instrument(skip(client, credentials))]
pub(crate) async fn get_access_token(
    client: &reqwest::Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<AccessToken> {
    let client_id = credentials
        .client_id()
        .ok_or(RankingsError::MissingCredentials { what: "client_id" })?;
    let client_secret = credentials
        .client_secret()
        .ok_or(RankingsError::MissingCredentials {
            what: "client_secret",
        })?;

    let request = client
        .post(token_url)
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")]);
    let (status, body) = wcl::send(request, token_url).await?;

    if !status.is_success() {
        return Err(RankingsError::AuthRejected { status, body });
    }

    let response: TokenResponse = wcl::decode(token_url, &body)?;
    let token = response
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| RankingsError::malformed(token_url, "access_token missing from response"))?;

    debug!("access token received");
    Ok(AccessToken::new(token))
}
