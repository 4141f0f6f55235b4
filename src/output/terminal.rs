//! Plain-text summary output

use std::io::Write;

use anyhow::Result;

use crate::writer::WriteSummary;

use super::OutputFormatter;

/// Terminal output formatter
pub struct TerminalOutput;

impl OutputFormatter for TerminalOutput {
    fn render(&self, summary: &WriteSummary, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "Wrote {}", summary.container.display())?;
        for entry in &summary.entries {
            writeln!(
                writer,
                "  /{}  ({} cols x {} rows at /{})",
                entry.group, entry.shape.columns, entry.shape.rows, entry.data_path
            )?;
        }
        Ok(())
    }
}
