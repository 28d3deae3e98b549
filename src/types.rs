/*!
 * Core types and data structures for the TreeDump application
 */

use std::fmt;
use std::path::PathBuf;

/// Kind of a filesystem entry, as rendered in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory containing other entries
    Directory,
    /// Anything else, including symlinks (never followed)
    File,
}

/// One immediate child of a directory being visited
#[derive(Debug, Clone)]
pub struct Entry {
    /// Entry name, as enumerated by the filesystem
    pub name: String,
    /// Full path of the entry, used to recurse into directories
    pub path: PathBuf,
    /// Kind discriminant, branched on once per entry
    pub kind: EntryKind,
}

impl Entry {
    /// Whether this entry is rendered (and recursed into) as a directory
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Destination for the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// The process standard output stream (plain lines)
    Stdout,
    /// A named file, wrapped in a fenced code block
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("standard output"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
