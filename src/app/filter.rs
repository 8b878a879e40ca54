use crate::app::models::MergeConfig;
use std::path::Path;

/// Decides which directories are descended into and which files are merged.
///
/// All paths handed to the filter are relative to the configured root and
/// rendered with `/` separators (see [`relative_key`]).
pub struct PathFilter<'a> {
    config: &'a MergeConfig,
}

impl<'a> PathFilter<'a> {
    pub fn new(config: &'a MergeConfig) -> Self {
        Self { config }
    }

    /// False when the directory is, or lies below, an excluded folder.
    pub fn should_descend(&self, dir_relative: &str) -> bool {
        !matches_folder_prefix(dir_relative, &self.config.exclude_folders)
    }

    pub fn should_include_file(&self, file_relative: &str, extension: &str) -> bool {
        if !self
            .config
            .allowed_extensions
            .iter()
            .any(|ext| ext == extension)
        {
            return false;
        }

        let include = &self.config.include_folders;
        // an empty include entry designates the root, which holds every file
        include.is_empty()
            || include.iter().any(String::is_empty)
            || matches_folder_prefix(file_relative, include)
    }
}

/// Shared by the include and exclude checks: `relative` matches an entry when
/// it equals it or starts with `entry/`. An empty entry matches nothing here.
pub fn matches_folder_prefix(relative: &str, entries: &[String]) -> bool {
    entries.iter().filter(|entry| !entry.is_empty()).any(|entry| {
        relative == entry
            || relative
                .strip_prefix(entry.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Normalizes a user-supplied folder entry: trims whitespace, converts `\` to
/// `/`, and drops leading `./` and trailing `/`.
pub fn normalize_folder(entry: &str) -> String {
    let mut folder = entry.trim().replace('\\', "/");

    while let Some(rest) = folder.strip_prefix("./") {
        folder = rest.to_string();
    }
    if folder == "." {
        folder.clear();
    }

    folder.trim_end_matches('/').to_string()
}

/// Renders a relative path with `/` between components on every platform.
pub fn relative_key(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// The final dot-suffix of the file name, dot included. Empty when the name
/// has none (`Makefile`, `.gitignore`).
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(include: &[&str], exclude: &[&str], ext: &[&str]) -> MergeConfig {
        let owned = |items: &[&str]| -> Vec<String> {
            items.iter().map(|s| normalize_folder(s)).collect()
        };
        MergeConfig {
            root: PathBuf::from("."),
            include_folders: owned(include),
            exclude_folders: owned(exclude),
            allowed_extensions: ext.iter().map(|s| s.to_string()).collect(),
            output: PathBuf::from("merged_output.txt"),
        }
    }

    #[test]
    fn exclude_matches_exact_and_nested_but_not_siblings_sharing_a_prefix() {
        let cfg = config(&[], &["dist", "node_modules"], &[".js"]);
        let filter = PathFilter::new(&cfg);

        assert!(!filter.should_descend("dist"));
        assert!(!filter.should_descend("dist/assets"));
        assert!(!filter.should_descend("node_modules/react/lib"));
        assert!(filter.should_descend("distribution"));
        assert!(filter.should_descend("src/dist"));
    }

    #[test]
    fn empty_exclude_set_descends_everywhere() {
        let cfg = config(&[], &[], &[".js"]);
        assert!(PathFilter::new(&cfg).should_descend(".git"));
    }

    #[test]
    fn include_restricts_files_to_listed_folders() {
        let cfg = config(&["src"], &[], &[".js"]);
        let filter = PathFilter::new(&cfg);

        assert!(filter.should_include_file("src/a.js", ".js"));
        assert!(filter.should_include_file("src/sub/c.js", ".js"));
        assert!(!filter.should_include_file("lib/b.js", ".js"));
        assert!(!filter.should_include_file("srcfile.js", ".js"));
        // Files at the root carry no folder prefix.
        assert!(!filter.should_include_file("index.js", ".js"));
    }

    #[test]
    fn root_entry_allows_root_level_files() {
        let cfg = config(&["."], &[], &[".js"]);
        let filter = PathFilter::new(&cfg);

        assert!(filter.should_include_file("index.js", ".js"));
        assert!(filter.should_include_file("lib/b.js", ".js"));
    }

    #[test]
    fn root_entry_does_not_exclude_anything() {
        let cfg = config(&[], &["."], &[".js"]);
        let filter = PathFilter::new(&cfg);

        assert!(filter.should_descend("src"));
        assert!(filter.should_descend("src/sub"));
        assert!(!matches_folder_prefix("src", &[String::new()]));
    }

    #[test]
    fn extension_match_is_exact_and_case_sensitive() {
        let cfg = config(&[], &[], &[".js", ".ts"]);
        let filter = PathFilter::new(&cfg);

        assert!(filter.should_include_file("a.ts", ".ts"));
        assert!(!filter.should_include_file("a.JS", ".JS"));
        assert!(!filter.should_include_file("a.json", ".json"));
        assert!(!filter.should_include_file("Makefile", ""));
    }

    #[test]
    fn extensionless_files_need_an_explicit_empty_extension() {
        let cfg = config(&[], &[], &[""]);
        assert!(PathFilter::new(&cfg).should_include_file("Makefile", ""));
    }

    #[test]
    fn folder_entries_are_normalized() {
        assert_eq!(normalize_folder(" ./src/ "), "src");
        assert_eq!(normalize_folder("src\\generated\\"), "src/generated");
        assert_eq!(normalize_folder("./"), "");
        assert_eq!(normalize_folder("."), "");

        let cfg = config(&["src\\generated"], &[], &[".js"]);
        assert!(PathFilter::new(&cfg).should_include_file("src/generated/x.js", ".js"));
    }

    #[test]
    fn extension_is_the_last_dot_suffix() {
        assert_eq!(extension_of(Path::new("src/a.js")), ".js");
        assert_eq!(extension_of(Path::new("bundle.min.js")), ".js");
        assert_eq!(extension_of(Path::new("Makefile")), "");
        assert_eq!(extension_of(Path::new(".gitignore")), "");
    }

    #[test]
    fn relative_key_joins_components_with_slashes() {
        let rel: PathBuf = ["src", "sub", "c.js"].iter().collect();
        assert_eq!(relative_key(&rel), "src/sub/c.js");
    }
}
