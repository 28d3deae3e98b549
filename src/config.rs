/*!
 * Configuration handling for TreeDump
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::types::OutputTarget;

/// Command-line arguments for TreeDump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a directory hierarchy as a box-drawing text tree",
    long_about = "Walks a root directory and prints its hierarchy as a text tree with \
box-drawing connectors, either to standard output or to a file wrapped in a fenced \
code block suitable for embedding in rendered documents."
)]
pub struct Args {
    /// Root directory to render
    #[clap(default_value = ".")]
    pub root_dir: String,

    /// Render directories only, omitting files
    #[clap(short = 'd', long)]
    pub dir_only: bool,

    /// Write the tree to FILE (wrapped in a fenced code block) instead of stdout
    #[clap(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<String>,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to render
    pub root_dir: PathBuf,

    /// Whether non-directory entries are omitted
    pub dir_only: bool,

    /// Destination for the rendered tree
    pub output: OutputTarget,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            root_dir: PathBuf::from(args.root_dir),
            dir_only: args.dir_only,
            output: match args.output_file {
                Some(path) => OutputTarget::File(PathBuf::from(path)),
                None => OutputTarget::Stdout,
            },
        }
    }

    /// Validate the configuration
    ///
    /// Pre-flight checks for the CLI only; the generator itself accepts the
    /// root unchecked and lets the filesystem enumeration fail.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.root_dir.exists() && self.root_dir.is_dir(),
            Config,
            "Root directory not found: {}",
            self.root_dir.display()
        );

        // Check that the output file's parent directory exists
        if let OutputTarget::File(path) = &self.output {
            if let Some(parent) = path.parent() {
                ensure!(
                    parent.as_os_str().is_empty() || parent.exists(),
                    Config,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        Ok(())
    }
}
