use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while walking, reading or persisting.
///
/// `List`, `Stat` and `Read` are recovered by the walker: the entry is
/// reported and skipped. `Write` ends the run.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Error reading directory {path}: {source}")]
    List {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error stating file {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
