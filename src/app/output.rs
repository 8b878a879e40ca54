use crate::app::error::MergeError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writes the merged content to `destination`, or to stdout when it is `-`.
pub fn persist(content: &str, destination: &Path) -> Result<(), MergeError> {
    let written = if destination == Path::new("-") {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
    } else {
        fs::write(destination, content)
    };

    written.map_err(|source| MergeError::Write {
        path: destination.to_path_buf(),
        source,
    })
}
