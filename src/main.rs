mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use wcl_rankings::{PipelineError, RankingsQuery, Stage, WclClient};

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv = cli::load_dotenv(None);
    let cli = Cli::parse();
    cli::init_tracing(&cli);
    if let Some(path) = dotenv {
        debug!(path = %path.display(), "loaded environment file");
    }

    let client = match WclClient::new(cli.config()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "could not start");
            return ExitCode::FAILURE;
        }
    };

    match wcl_rankings::run(&client, &RankingsQuery::default(), &cli.output).await {
        Ok(summary) => {
            info!(
                encounter = %summary.encounter_name,
                rows = summary.rows,
                path = %summary.output.display(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(stage = %e.stage, error = %e.source, "{}", failure_hint(&e));
            exit_code(e.stage)
        }
    }
}

fn failure_hint(err: &PipelineError) -> &'static str {
    match err.stage {
        Stage::Authenticating => "failed to obtain access token, please check your credentials",
        Stage::Querying => "could not retrieve rankings data from the API",
        Stage::Extracting => "failed to parse rankings data",
        Stage::Rendering | Stage::Writing => "error saving rankings output to file",
    }
}

fn exit_code(stage: Stage) -> ExitCode {
    match stage {
        Stage::Authenticating => ExitCode::from(2),
        Stage::Querying => ExitCode::from(3),
        Stage::Extracting => ExitCode::from(4),
        Stage::Rendering | Stage::Writing => ExitCode::from(5),
    }
}
