/*!
 * Utility functions for TreeDump
 */

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;

/// Count the entries a render will visit, for progress tracking
///
/// Unreadable entries are skipped here; the generator itself surfaces them
/// as hard errors.
pub fn count_entries(dir: &Path, config: &Config) -> io::Result<u64> {
    let mut count = 0;

    for entry in WalkDir::new(dir).min_depth(1).into_iter().filter_map(Result::ok) {
        if config.dir_only && !entry.file_type().is_dir() {
            continue;
        }
        count += 1;
    }

    Ok(count)
}
