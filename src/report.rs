/*!
 * Reporting functionality for TreeDump
 *
 * Provides functionality for generating formatted summaries of render runs
 * using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// Statistics for one render run
#[derive(Debug, Clone)]
pub struct RenderReport {
    /// Where the tree was written
    pub destination: String,
    /// Time taken to build and write the tree
    pub duration: Duration,
    /// Number of directory entries rendered
    pub directories: usize,
    /// Number of file entries rendered
    pub files: usize,
    /// Length of the tree line sequence (fence lines excluded)
    pub lines: usize,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
}

/// Report generator for render runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string for a render run
    pub fn generate_report(&self, report: &RenderReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            // Additional formats could be added here
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &RenderReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &RenderReport) -> String {
        // Define the summary table data structure
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Destination".to_string(),
                value: report.destination.clone(),
            },
            SummaryRow {
                key: "⏱️ Render Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📁 Directories".to_string(),
                value: self.format_number(report.directories),
            },
            SummaryRow {
                key: "📄 Files".to_string(),
                value: self.format_number(report.files),
            },
            SummaryRow {
                key: "📝 Tree Lines".to_string(),
                value: self.format_number(report.lines),
            },
        ];

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &RenderReport) -> String {
        let summary_table = self.create_summary_table(report);
        format!("✅  RENDER COMPLETE\n{}", summary_table)
    }
}
