//! Fetch Warcraft Logs character rankings for an encounter and publish the
//! top ten as a Markdown table.

pub use client::WclClient;
pub use config::{Config, Credentials, Endpoints};
pub use error::{RankingsError, Result};
pub use model::*;
pub use output::{save_output, DEFAULT_OUTPUT_FILE};
pub use pipeline::{run, PipelineError, RunSummary, Stage};
pub use render::{render_rankings, NO_RANKINGS, PLACEHOLDER};
pub use wcl::extract::TOP_RANKINGS;

mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod render;
pub(crate) mod wcl;
