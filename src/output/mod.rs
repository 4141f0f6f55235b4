//! Output formatting for write summaries

mod json;
mod terminal;

use std::io::Write;

use anyhow::Result;

use crate::config::OutputFormat;
use crate::writer::WriteSummary;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

/// Trait for summary formatters
pub trait OutputFormatter {
    /// Render a write summary to a writer
    fn render(&self, summary: &WriteSummary, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput),
            OutputFormat::Json => Box::new(JsonOutput::new()),
        }
    }
}

/// Render a write summary to stdout
pub fn render_to_stdout(summary: &WriteSummary, format: OutputFormat) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = std::io::stdout();
    formatter.render(summary, &mut stdout)
}
