use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{RankingsError, Result};

/// File the rendered table is written to when no path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "rankings.md";

/// Write `content` to `path` as UTF-8, replacing whatever was there.
///
/// The handle is closed before returning on every path. If the write fails
/// partway the file contents are unspecified.
#[instrument(skip(content), fields(bytes = content.len()))]
pub fn save_output(content: &str, path: &Path) -> Result<()> {
    let to_error = |source| RankingsError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    debug!("output written");
    Ok(())
}
