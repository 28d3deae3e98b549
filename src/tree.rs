/*!
 * Directory tree orchestration
 */

use std::sync::Arc;

use indicatif::ProgressBar;

use crate::config::Config;
use crate::error::Result;
use crate::generator::{GeneratorStatistics, TreeGenerator};
use crate::types::OutputTarget;
use crate::writer::{TreeWriter, FENCE};

/// Orchestrates tree generation and output
pub struct DirectoryTree {
    /// Tree configuration
    config: Config,
    /// Line sequence generator
    generator: TreeGenerator,
    /// Output writer
    writer: TreeWriter,
}

impl DirectoryTree {
    /// Create a new directory tree for the given configuration
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        let generator = TreeGenerator::new(config.clone(), progress);
        let writer = TreeWriter::new(config.clone());
        Self {
            config,
            generator,
            writer,
        }
    }

    /// Build the line sequence once and deliver it to the output target
    ///
    /// File targets get the sequence wrapped in fence marker lines. A build
    /// failure propagates before anything is written, so a failed run leaves
    /// no output behind.
    pub fn generate(&mut self) -> Result<()> {
        let mut tree = self.generator.build_tree()?;

        if let OutputTarget::File(_) = self.config.output {
            tree.insert(0, FENCE.to_string());
            tree.push(FENCE.to_string());
        }

        self.writer.write(&tree)
    }

    /// Get statistics for the most recent generation
    pub fn get_statistics(&self) -> GeneratorStatistics {
        self.generator.get_statistics()
    }
}
