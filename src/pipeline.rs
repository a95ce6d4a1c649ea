use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::client::WclClient;
use crate::error::RankingsError;
use crate::model::RankingsQuery;
use crate::output::save_output;
use crate::render::{render_rankings, PLACEHOLDER};

/// Pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Stage {
    Authenticating,
    Querying,
    Extracting,
    Rendering,
    Writing,
}

/// Terminal failure of a run: the stage that failed and why.
#[derive(thiserror::Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: RankingsError,
}

impl PipelineError {
    fn at(stage: Stage) -> impl FnOnce(RankingsError) -> Self {
        move |source| Self { stage, source }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub encounter_name: String,
    pub rows: usize,
    pub output: PathBuf,
}

/// Fetch, render and save the top rankings for `query`.
///
/// Stages run strictly in order and the first failure ends the run. The
/// output file is only touched once every earlier stage has succeeded.
#[instrument(skip(client))]
pub async fn run(
    client: &WclClient,
    query: &RankingsQuery,
    output: &Path,
) -> Result<RunSummary, PipelineError> {
    info!(stage = %Stage::Authenticating, "getting access token");
    let token = client
        .get_access_token()
        .await
        .map_err(PipelineError::at(Stage::Authenticating))?;

    info!(stage = %Stage::Querying, "access token received, fetching rankings");
    let response = client
        .get_character_rankings(&token, query)
        .await
        .map_err(PipelineError::at(Stage::Querying))?;

    debug!(stage = %Stage::Extracting, "parsing rankings response");
    let encounter = WclClient::parse_rankings_response(&response)
        .map_err(PipelineError::at(Stage::Extracting))?;

    let encounter_name = encounter
        .encounter_name
        .unwrap_or_else(|| PLACEHOLDER.to_owned());
    debug!(stage = %Stage::Rendering, rows = encounter.rankings.len(), "rendering table");
    let table = render_rankings(&encounter_name, &encounter.rankings);

    debug!(stage = %Stage::Writing, path = %output.display(), "writing table");
    save_output(&table, output).map_err(PipelineError::at(Stage::Writing))?;
    info!(path = %output.display(), rows = encounter.rankings.len(), "rankings saved");

    Ok(RunSummary {
        encounter_name,
        rows: encounter.rankings.len(),
        output: output.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_display_names_stage() {
        let err = PipelineError {
            stage: Stage::Extracting,
            source: RankingsError::NoRankingsFound,
        };
        assert_eq!(
            err.to_string(),
            "extracting failed: no character rankings found in the API response"
        );
    }
}
