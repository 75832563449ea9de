/*!
 * Output Sinks
 * Render run reports, process tables and summaries
 */

mod json;
mod table;

pub use json::JsonSink;
pub use table::TableSink;

use crate::process::Process;
use crate::scheduler::{RunReport, RunSummary};
use std::io::{self, Write};
use std::str::FromStr;

/// Destination for everything the simulator reports
pub trait OutputSink {
    /// A completed run: events, timeline, final table and averages
    fn report(&mut self, report: &RunReport) -> io::Result<()>;

    /// Current registry contents
    fn processes(&mut self, processes: &[Process]) -> io::Result<()>;

    /// Last-run averages, `None` before the first run
    fn summary(&mut self, summary: Option<&RunSummary>) -> io::Result<()>;

    /// Free-form status line
    fn message(&mut self, message: &str) -> io::Result<()>;
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format '{}'. Valid: table, json", s)),
        }
    }
}

/// Build the sink for a format
pub fn sink_for<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn OutputSink> {
    match format {
        OutputFormat::Table => Box::new(TableSink::new(writer)),
        OutputFormat::Json => Box::new(JsonSink::new(writer)),
    }
}
