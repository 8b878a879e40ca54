use std::path::{Path, PathBuf};

/// Accumulates merged file chunks in the order they are collected.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    content: String,
    files: Vec<PathBuf>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one chunk: header, the unmodified content, footer.
    pub fn collect(&mut self, file_path: &Path, content: &str) {
        let shown = file_path.display();

        self.content
            .push_str(&format!("\n// --------- File: {} ---------\n", shown));
        self.content.push_str(content);
        self.content
            .push_str(&format!("\n// --------- End of File: {} ---------\n\n", shown));

        self.files.push(file_path.to_path_buf());
    }

    /// Paths of the collected files, in collection order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn into_string(self) -> String {
        self.content
    }
}
