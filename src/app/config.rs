use crate::app::cli::Cli;
use crate::app::filter::normalize_folder;
use crate::app::models::MergeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", "dist", ".git"];

pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".js", ".ts", ".jsx", ".tsx", ".py", ".java", ".cpp", ".c", ".cs", ".rb", ".go", ".php",
    ".html", ".css", ".json",
];

pub const DEFAULT_OUTPUT: &str = "merged_output.txt";

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
struct PresetConfig {
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    ext: Option<Vec<String>>,
    output: Option<PathBuf>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("code_merge").join("presets.toml"))
}

fn load_presets_file(path: &Path) -> Result<HashMap<String, PresetConfig>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read presets at {}", path.display()))?;

    parse_presets(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content)?;
    Ok(parsed.presets)
}

/// Preset list followed by CLI list, trimmed, empties dropped, deduplicated in
/// order. `None` when nothing non-empty was supplied, so defaults still apply
/// to `--ext ""`.
fn merge_vecs(
    preset_vec: Option<Vec<String>>,
    cli_vec: Option<Vec<String>>,
) -> Option<Vec<String>> {
    let mut combined: Vec<String> = preset_vec
        .into_iter()
        .chain(cli_vec)
        .flatten()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if combined.is_empty() {
        return None;
    }

    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    Some(combined)
}

fn defaults(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn normalize_folders(folders: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    folders
        .iter()
        .map(|f| normalize_folder(f))
        .filter(|f| seen.insert(f.clone()))
        .collect()
}

/// Builds the run configuration from the presets file, CLI flags and defaults.
pub fn resolve_config(cli: Cli, cwd: &Path) -> Result<MergeConfig> {
    let presets = load_presets_file(&presets_path()?)?;
    resolve_with_presets(cli, cwd, &presets)
}

fn resolve_with_presets(
    cli: Cli,
    cwd: &Path,
    presets: &HashMap<String, PresetConfig>,
) -> Result<MergeConfig> {
    let root = match cli.root {
        Some(root) => root,
        None => cwd.to_path_buf(),
    };

    // Determine preset to use: CLI flag > root folder name > None
    let folder_name = root
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));
    let preset = match cli.preset.as_deref() {
        Some(name) => presets
            .get(name)
            .cloned()
            .with_context(|| format!("Unknown preset '{}'", name))?,
        None => folder_name
            .as_deref()
            .and_then(|name| presets.get(name))
            .cloned()
            .unwrap_or_default(),
    };

    let include_folders = merge_vecs(preset.include, cli.include).unwrap_or_default();
    let exclude_folders =
        merge_vecs(preset.exclude, cli.exclude).unwrap_or_else(|| defaults(DEFAULT_EXCLUDES));
    let allowed_extensions =
        merge_vecs(preset.ext, cli.ext).unwrap_or_else(|| defaults(DEFAULT_EXTENSIONS));

    Ok(MergeConfig {
        root,
        include_folders: normalize_folders(include_folders),
        exclude_folders: normalize_folders(exclude_folders),
        allowed_extensions,
        output: cli
            .output
            .or(preset.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
    })
}
