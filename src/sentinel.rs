use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default location of the file naming the data to plot, relative to the
/// working directory.
pub const DEFAULT_SENTINEL: &str = "selected_model_filename.txt";

#[derive(Debug, Error)]
pub enum SentinelError {
    #[error(
        "{} not found. Ensure the simulation program executed properly and wrote the selected model's filename.",
        .path.display()
    )]
    NotFound { path: PathBuf },

    #[error("reading {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} does not name a data file", .path.display())]
    Empty { path: PathBuf },
}

/// Read the sentinel file and return the data file path it names.
///
/// Only the first non-blank line counts; surrounding whitespace is trimmed.
pub fn resolve_data_path(sentinel: &Path) -> Result<PathBuf, SentinelError> {
    let text = std::fs::read_to_string(sentinel).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SentinelError::NotFound {
                path: sentinel.to_path_buf(),
            }
        } else {
            SentinelError::Read {
                path: sentinel.to_path_buf(),
                source,
            }
        }
    })?;

    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.next().ok_or_else(|| SentinelError::Empty {
        path: sentinel.to_path_buf(),
    })?;

    if lines.next().is_some() {
        log::warn!(
            "{} has more than one line; using only '{first}'",
            sentinel.display()
        );
    }

    log::info!("{} names data file {first}", sentinel.display());
    Ok(PathBuf::from(first))
}
