//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

/// Path algebra and tree operations of the pipeline step file manager.
///
/// Paths are combined paths such as `/project-dir:/notebooks/eda.ipynb`;
/// a trailing `/` marks a directory. Results are printed as JSON.
#[derive(Debug, Parser)]
#[command(name = "stepfs", version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Entry name of a combined path
    Basename { path: String },

    /// Folder one level up
    Parent { path: String },

    /// Relative path from a folder to a file
    Relpath { file: String, folder: String },

    /// Destination of dropping SOURCE onto TARGET
    Move { source: String, target: String },

    /// Human-readable location of a combined path
    Describe { path: String },

    /// Drop selected paths already covered by a selected directory
    Filter {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Folder new entries go into for a selection
    TargetFolder { paths: Vec<String> },

    /// Find a node and its parent in a root tree (browse JSON)
    Search { tree: PathBuf, path: String },

    /// Check if a node exists with no children loaded
    Childless { tree: PathBuf, path: String },

    /// Merge a fetched subtree into a root tree and print the result
    Merge {
        tree: PathBuf,
        subtree: PathBuf,
        /// Root both trees belong to
        #[arg(long, default_value = "/project-dir")]
        root: String,
    },

    /// Partition selected files for assignment to a step
    Validate {
        /// Step the files are assigned to
        #[arg(long)]
        step: String,
        /// JSON object mapping step ids to steps
        #[arg(long)]
        steps: PathBuf,
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Build an extension-search request path
    Query {
        #[arg(long)]
        project: String,
        #[arg(long, default_value = "/project-dir")]
        root: String,
        #[arg(long, default_value = "/")]
        path: String,
        /// Extensions to search for (comma-separated)
        #[arg(long = "ext", value_delimiter = ',', required = true)]
        extensions: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity() {
        let cli = Cli::parse_from(["stepfs", "-vv", "basename", "/data:/"]);
        assert_eq!(cli.log_level(), Level::TRACE);
        let cli = Cli::parse_from(["stepfs", "basename", "/data:/"]);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_query_extensions_split() {
        let cli = Cli::parse_from(["stepfs", "query", "--project", "p", "--ext", "py,ipynb"]);
        match cli.command {
            Command::Query { extensions, .. } => assert_eq!(extensions, vec!["py", "ipynb"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
