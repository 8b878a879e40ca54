use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Merge the source files of a directory tree into a single text file"
)]
pub struct Cli {
    /// Directory to start the traversal from (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// File to write the merged content to, or '-' for stdout (default: merged_output.txt)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Folders (relative to root) whose files are merged, e.g. 'src,lib'
    #[arg(long, value_delimiter = ',')]
    pub include: Option<Vec<String>>,

    /// Folders (relative to root) to skip, e.g. 'node_modules,dist,.git'
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// File extensions to merge, e.g. '.js,.ts,.py'
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,
}
