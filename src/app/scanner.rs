use crate::app::error::MergeError;
use crate::app::events::{EventSink, WalkEvent};
use crate::app::filter::{extension_of, relative_key, PathFilter};
use crate::app::formatter::OutputBuffer;
use crate::app::fs::FileSystem;
use crate::app::models::{EntryKind, MergeConfig};
use pathdiff::diff_paths;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::vec;

pub struct Scanner<'a, F: FileSystem> {
    root: PathBuf,
    filter: PathFilter<'a>,
    fs: &'a F,
}

impl<'a, F: FileSystem> Scanner<'a, F> {
    pub fn new(config: &'a MergeConfig, fs: &'a F) -> Self {
        Self {
            root: normalize_path(&config.root),
            filter: PathFilter::new(config),
            fs,
        }
    }

    /// Depth-first, pre-order walk from the root.
    ///
    /// Pending listings live on an explicit stack, one iterator per open
    /// directory, which visits entries in the same order plain recursion would
    /// without growing the call stack.
    pub fn scan(&self, sink: &mut impl EventSink) -> OutputBuffer {
        let mut buffer = OutputBuffer::new();
        let mut stack: Vec<vec::IntoIter<PathBuf>> = Vec::new();

        if let Some(children) = self.list(&self.root, sink) {
            stack.push(children);
        }

        while let Some(pending) = stack.last_mut() {
            let Some(path) = pending.next() else {
                stack.pop();
                continue;
            };

            match self.fs.entry_kind(&path) {
                Ok(EntryKind::Dir) => {
                    if !self.filter.should_descend(&self.relative(&path)) {
                        sink.emit(WalkEvent::Excluded(path));
                        continue;
                    }
                    if let Some(children) = self.list(&path, sink) {
                        stack.push(children);
                    }
                }
                Ok(EntryKind::File) => self.visit_file(path, &mut buffer, sink),
                Ok(EntryKind::Other) => {
                    log::debug!("Skipping non-regular entry: {}", path.display());
                }
                Err(source) => sink.emit(WalkEvent::Failed(MergeError::Stat { path, source })),
            }
        }

        buffer
    }

    /// A directory that cannot be opened yields `None`. A single unreadable
    /// entry is reported and the rest of the listing is kept.
    fn list(&self, dir: &Path, sink: &mut impl EventSink) -> Option<vec::IntoIter<PathBuf>> {
        let entries = match self.fs.list_entries(dir) {
            Ok(entries) => entries,
            Err(source) => {
                sink.emit(WalkEvent::Failed(MergeError::List {
                    path: dir.to_path_buf(),
                    source,
                }));
                return None;
            }
        };

        let mut children = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                Ok(name) => children.push(child_path(dir, name)),
                Err(source) => sink.emit(WalkEvent::Failed(MergeError::List {
                    path: dir.to_path_buf(),
                    source,
                })),
            }
        }
        Some(children.into_iter())
    }

    fn visit_file(&self, path: PathBuf, buffer: &mut OutputBuffer, sink: &mut impl EventSink) {
        let extension = extension_of(&path);
        if !self
            .filter
            .should_include_file(&self.relative(&path), &extension)
        {
            return;
        }

        match self.fs.read_text(&path) {
            Ok(content) => {
                buffer.collect(&path, &content);
                sink.emit(WalkEvent::Added(path));
            }
            Err(source) => sink.emit(WalkEvent::Failed(MergeError::Read { path, source })),
        }
    }

    /// Directories and files go through the same computation, so both checks
    /// see identically normalized keys.
    fn relative(&self, path: &Path) -> String {
        let relative = diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf());
        relative_key(&relative)
    }
}

/// Lexically resolves `.` and `..` components, yielding `.` for an empty
/// result, so `./src/../lib` is shown as `lib`.
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Joins like a normalized path join: children of `.` carry no `./` prefix.
fn child_path(dir: &Path, name: OsString) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}
