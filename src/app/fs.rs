use crate::app::models::EntryKind;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// The filesystem operations the walker needs.
pub trait FileSystem {
    /// Names of the entries directly inside `dir`. The outer error means the
    /// directory could not be opened; inner errors belong to single entries.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<io::Result<OsString>>>;

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Whole file as UTF-8 text. Invalid UTF-8 is an error.
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// `std::fs` backed implementation.
///
/// Listings are sorted by name so the output does not depend on the order the
/// platform happens to return entries in. Entry errors come first.
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<io::Result<OsString>>> {
        let mut names = Vec::new();
        let mut failed = Vec::new();
        for entry in fs::read_dir(dir)? {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                Err(err) => failed.push(Err(err)),
            }
        }
        names.sort();

        failed.extend(names.into_iter().map(Ok));
        Ok(failed)
    }

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        // symlink_metadata: links are never followed, so cycles cannot occur
        let file_type = fs::symlink_metadata(path)?.file_type();

        Ok(if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listings_are_sorted_by_name() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        for name in ["b.js", "a.js", "c"] {
            fs::write(dir.path().join(name), "").expect("Failed to write file");
        }

        let names = DiskFs
            .list_entries(dir.path())
            .expect("listing failed")
            .into_iter()
            .collect::<io::Result<Vec<_>>>()
            .expect("entry failed");
        assert_eq!(names, vec!["a.js", "b.js", "c"]);
    }

    #[test]
    fn kinds_are_reported_without_following_links() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir(dir.path().join("sub")).expect("Failed to create dir");
        fs::write(dir.path().join("a.js"), "x").expect("Failed to write file");

        assert_eq!(DiskFs.entry_kind(&dir.path().join("sub")).unwrap(), EntryKind::Dir);
        assert_eq!(DiskFs.entry_kind(&dir.path().join("a.js")).unwrap(), EntryKind::File);

        #[cfg(unix)]
        {
            std::os::unix::fs::symlink(dir.path().join("sub"), dir.path().join("link"))
                .expect("Failed to create symlink");
            assert_eq!(
                DiskFs.entry_kind(&dir.path().join("link")).unwrap(),
                EntryKind::Other
            );
        }
    }

    #[test]
    fn non_utf8_content_is_a_read_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("blob.js");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("Failed to write file");

        let err = DiskFs.read_text(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn missing_directory_fails_to_list() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        assert!(DiskFs.list_entries(&dir.path().join("gone")).is_err());
    }
}
