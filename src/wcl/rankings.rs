use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::{RankingsError, Result};
use crate::model::{AccessToken, RankingsQuery};
use crate::wcl;

pub(crate) const CHARACTER_RANKINGS_QUERY: &str = r#"
query($encounterID: Int!, $difficulty: Int!, $metric: CharacterRankingMetricType!) {
  worldData {
    encounter(id: $encounterID) {
      name
      characterRankings(metric: $metric, difficulty: $difficulty)
    }
  }
}
"#;

#[derive(Debug, Serialize)]
struct RankingsRequest<'a> {
    query: &'a str,
    variables: &'a RankingsQuery,
}

/// Run the character rankings query and return the raw response body.
///
/// No schema validation happens here; GraphQL-level `errors` are logged and
/// left for extraction to judge.
#[instrument(skip(client, token))]
pub(crate) async fn get_character_rankings(
    client: &reqwest::Client,
    api_url: &str,
    token: &AccessToken,
    query: &RankingsQuery,
) -> Result<serde_json::Value> {
    if token.is_empty() {
        return Err(RankingsError::MissingCredentials {
            what: "access token",
        });
    }

    debug!(
        encounter_id = query.encounter_id,
        difficulty = query.difficulty,
        metric = %query.metric,
        "querying character rankings"
    );
    let request = client
        .post(api_url)
        .bearer_auth(token.as_str())
        .json(&RankingsRequest {
            query: CHARACTER_RANKINGS_QUERY,
            variables: query,
        });
    let (status, body) = wcl::send(request, api_url).await?;

    if !status.is_success() {
        return Err(RankingsError::QueryRejected { status, body });
    }

    let response: serde_json::Value = wcl::decode(api_url, &body)?;
    log_graphql_errors(&response);
    debug!("rankings response decoded");
    Ok(response)
}

fn log_graphql_errors(response: &serde_json::Value) {
    let Some(errors) = response.get("errors").and_then(|e| e.as_array()) else {
        return;
    };
    for error in errors {
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error");
        warn!(message, "GraphQL error in rankings response");
    }
}
