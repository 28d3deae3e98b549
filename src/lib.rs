/*!
 * TreeDump - Render a directory hierarchy as a box-drawing text tree
 *
 * This library walks a root directory and produces an ordered sequence of
 * display lines with tee/elbow connectors, delivered to standard output or
 * to a file wrapped in a fenced code block.
 */

pub mod config;
pub mod error;
pub mod generator;
pub mod report;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{Result, TreeDumpError};
pub use generator::{GeneratorStatistics, TreeGenerator};
pub use report::{RenderReport, ReportFormat, Reporter};
pub use tree::DirectoryTree;
pub use types::{Entry, EntryKind, OutputTarget};
pub use utils::count_entries;
pub use writer::TreeWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
