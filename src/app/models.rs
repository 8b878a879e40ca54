use std::path::PathBuf;

/// Represents the final configuration after merging presets and CLI args.
///
/// Folder entries are already normalized (see `filter::normalize_folder`).
#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub root: PathBuf,
    pub include_folders: Vec<String>,
    pub exclude_folders: Vec<String>,
    pub allowed_extensions: Vec<String>,
    pub output: PathBuf,
}

/// What a directory entry turned out to be, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other, // symlinks, sockets, devices
}
