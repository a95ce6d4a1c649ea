use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use wcl_rankings::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOKEN_URL};
use wcl_rankings::{Config, Credentials, Endpoints, DEFAULT_OUTPUT_FILE};

/// Fetch the top Mythic DPS rankings for Gallywix from Warcraft Logs.
#[derive(Parser, Debug)]
#[command(name = "wcl-rankings", version, about, long_about = None)]
pub(crate) struct Cli {
    /// Warcraft Logs API client ID.
    #[arg(long, env = "client_id", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Warcraft Logs API client secret.
    #[arg(long, env = "client_secret", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// File the rendered table is written to.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// OAuth token endpoint.
    #[arg(long, default_value = DEFAULT_TOKEN_URL)]
    pub token_url: String,

    /// GraphQL API endpoint.
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Timeout for each HTTP request, in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

impl Cli {
    pub(crate) fn config(&self) -> Config {
        let credentials = Credentials::new(self.client_id.clone(), self.client_secret.clone());
        Config::new(credentials)
            .with_endpoints(Endpoints {
                token_url: self.token_url.clone(),
                api_url: self.api_url.clone(),
            })
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

/// Load `path`, or a `.env` found in the working directory or its parents,
/// into the process environment so the `env` fallbacks on [`Cli`] see it.
///
/// Variables already set are left alone. A missing file is not an error.
pub(crate) fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_path(path).ok().map(|()| path.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}

pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match cli.verbose {
        0 => "wcl_rankings=info",
        1 => "wcl_rankings=debug",
        _ => "wcl_rankings=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}
