/*!
 * Line writer implementation for TreeDump
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::error::{Result, ResultExt};
use crate::types::OutputTarget;

/// Marker line opening and closing the fenced code block in file output
pub const FENCE: &str = "```";

/// Writer delivering a finished line sequence to the configured target
pub struct TreeWriter {
    /// Writer configuration
    config: Config,
}

impl TreeWriter {
    /// Create a new writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the line sequence to the configured output target
    pub fn write(&self, tree: &[String]) -> Result<()> {
        match &self.config.output {
            OutputTarget::Stdout => self.write_stdout(tree),
            OutputTarget::File(path) => self.write_file(path, tree),
        }
    }

    /// Write each line to the standard output stream
    fn write_stdout(&self, tree: &[String]) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        for line in tree {
            writeln!(handle, "{}", line)?;
        }
        handle.flush()?;
        Ok(())
    }

    /// Write each line to the named file, truncating any existing content
    ///
    /// The handle lives only for the scope of this call; the explicit flush
    /// surfaces write failures before it is released.
    fn write_file(&self, path: &Path, tree: &[String]) -> Result<()> {
        debug!("writing {} lines to {}", tree.len(), path.display());

        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        for line in tree {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}
