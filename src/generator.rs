/*!
 * Tree generation: the recursive directory walk and line formatting
 */

use std::path::{Path, MAIN_SEPARATOR};
use std::sync::Arc;

use indicatif::ProgressBar;
use log::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::types::{Entry, EntryKind};

/// Standalone spacer line emitted directly under the head line
pub const PIPE: &str = "|";
/// Connector for the last entry of a directory
pub const ELBOW: &str = "└──";
/// Connector for any entry that is not the last
pub const TEE: &str = "├──";
/// Prefix continuation token below a non-last directory
pub const PIPE_PREFIX: &str = "│   ";
/// Prefix continuation token below a last directory
pub const SPACE_PREFIX: &str = "    ";

/// Counters accumulated over one tree build
#[derive(Debug, Clone, Default)]
pub struct GeneratorStatistics {
    /// Number of directory entries rendered
    pub directories: usize,
    /// Number of file entries rendered
    pub files: usize,
    /// Length of the built line sequence
    pub lines: usize,
}

/// Generator for the ordered tree line sequence
pub struct TreeGenerator {
    /// Generator configuration
    config: Config,
    /// Progress bar, advanced once per rendered entry
    progress: Arc<ProgressBar>,
    /// Counters for the current build
    statistics: GeneratorStatistics,
}

impl TreeGenerator {
    /// Create a new generator
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            statistics: GeneratorStatistics::default(),
        }
    }

    /// Get statistics for the most recent build
    pub fn get_statistics(&self) -> GeneratorStatistics {
        self.statistics.clone()
    }

    /// Build the full line sequence for the configured root
    ///
    /// One synchronous depth-first pass. Any enumeration error aborts the
    /// build; no partial sequence is returned.
    pub fn build_tree(&mut self) -> Result<Vec<String>> {
        self.statistics = GeneratorStatistics::default();

        let root = self.config.root_dir.clone();
        let mut tree = Vec::new();
        self.tree_head(&root, &mut tree);
        self.tree_body(&root, "", &mut tree)?;
        self.statistics.lines = tree.len();

        debug!("built {} tree lines for {}", tree.len(), root.display());
        Ok(tree)
    }

    /// Emit the head: the root path with a trailing separator, then the spacer
    fn tree_head(&self, root: &Path, tree: &mut Vec<String>) {
        let rendered = root.display().to_string();
        if rendered.ends_with(MAIN_SEPARATOR) {
            tree.push(rendered);
        } else {
            tree.push(format!("{}{}", rendered, MAIN_SEPARATOR));
        }
        tree.push(PIPE.to_string());
    }

    /// Render the entries of one directory, recursing into subdirectories
    fn tree_body(&mut self, directory: &Path, prefix: &str, tree: &mut Vec<String>) -> Result<()> {
        let entries = self.prepare_entries(directory)?;
        let count = entries.len();

        for (index, entry) in entries.iter().enumerate() {
            // tee for any entry that is not last, elbow for the last one
            let connector = if index == count - 1 { ELBOW } else { TEE };
            match entry.kind {
                EntryKind::Directory => {
                    self.add_directory(entry, index, count, prefix, connector, tree)?
                }
                EntryKind::File => self.add_file(entry, prefix, connector, tree),
            }
        }

        Ok(())
    }

    /// Render a directory entry, its subtree and its closing line
    fn add_directory(
        &mut self,
        entry: &Entry,
        index: usize,
        count: usize,
        prefix: &str,
        connector: &str,
        tree: &mut Vec<String>,
    ) -> Result<()> {
        self.progress.inc(1);
        self.progress.set_message(format!("Rendering: {}", entry.name));
        self.statistics.directories += 1;

        tree.push(format!(
            "{}{} {}{}",
            prefix, connector, entry.name, MAIN_SEPARATOR
        ));

        // Children of a non-last directory keep the vertical bar running
        let child_prefix = if index == count - 1 {
            format!("{}{}", prefix, SPACE_PREFIX)
        } else {
            format!("{}{}", prefix, PIPE_PREFIX)
        };
        self.tree_body(&entry.path, &child_prefix, tree)?;

        // Unconditional closing line per directory; a whitespace-only prefix
        // collapses to an empty line
        tree.push(child_prefix.trim_end().to_string());
        Ok(())
    }

    /// Render a file entry
    fn add_file(&mut self, entry: &Entry, prefix: &str, connector: &str, tree: &mut Vec<String>) {
        self.progress.inc(1);
        self.statistics.files += 1;
        tree.push(format!("{}{} {}", prefix, connector, entry.name));
    }

    /// List the immediate children of a directory, filtered and ordered
    ///
    /// Entry kinds are read without following symlinks, so a link to a
    /// directory renders as a file and the walk stays cycle-free.
    fn prepare_entries(&self, directory: &Path) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = entry?;
            let kind = if entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(Entry {
                name: entry.file_name().to_string_lossy().to_string(),
                path: entry.into_path(),
                kind,
            });
        }

        if self.config.dir_only {
            entries.retain(Entry::is_dir);
        } else {
            // Stable sort: all directories before all files, each group in
            // filesystem enumeration order
            entries.sort_by_key(|entry| entry.kind == EntryKind::File);
        }

        debug!(
            "prepared {} entries under {}",
            entries.len(),
            directory.display()
        );
        Ok(entries)
    }
}
