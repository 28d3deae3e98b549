/*!
 * Command-line interface for TreeDump
 */

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use treedump::config::{Args, Config};
use treedump::report::{RenderReport, ReportFormat, Reporter};
use treedump::tree::DirectoryTree;
use treedump::types::OutputTarget;
use treedump::utils::count_entries;

fn main() -> treedump::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Emit shell completions and exit early
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Configure logging; --verbose raises the filter to debug
    let mut log_builder = env_logger::Builder::from_default_env();
    if args.verbose {
        log_builder.filter_level(log::LevelFilter::Debug);
    }
    log_builder.init();

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // A visible bar would interleave with tree lines on stdout, so only file
    // targets get one
    let progress = match &config.output {
        OutputTarget::File(_) => {
            let progress = ProgressBar::new(0);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)",
                    )
                    .unwrap(),
            );
            progress.set_prefix("🌳 Rendering");
            progress.set_message(format!("Scanning directory: {}", config.root_dir.display()));

            // Count entries for progress tracking; the pre-count only feeds
            // the bar, so a failure just leaves the length at zero
            match count_entries(&config.root_dir, &config) {
                Ok(count) => {
                    progress.set_length(count);
                    progress.set_message(format!("Found {} entries to render", count));
                }
                Err(e) => {
                    progress.set_message(format!("⚠️ Warning: failed to count entries: {}", e));
                }
            }

            progress
        }
        OutputTarget::Stdout => ProgressBar::hidden(),
    };

    // Build the tree and deliver it to the target
    let mut tree = DirectoryTree::new(config.clone(), Arc::new(progress.clone()));

    let start_time = Instant::now();
    tree.generate()?;
    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Summarize the run; stdout targets already carry the tree itself
    if let OutputTarget::File(_) = &config.output {
        let statistics = tree.get_statistics();
        let report = RenderReport {
            destination: config.output.to_string(),
            duration: total_duration,
            directories: statistics.directories,
            files: statistics.files,
            lines: statistics.lines,
        };

        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        reporter.print_report(&report);
    }

    Ok(())
}
