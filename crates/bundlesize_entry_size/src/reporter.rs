use bundlesize_core::format_size;
use log::debug;
use std::io::{self, Write};

use crate::types::SizeReport;

/// Writes the plain-text report: a chunk count followed by one line per entry.
pub fn print_report<W: Write>(writer: &mut W, report: &SizeReport) -> io::Result<()> {
    debug!("Printing report for {} entries", report.entries.len());
    writeln!(writer, "sized chunks: {}", report.sized_chunks)?;

    for entry in &report.entries {
        writeln!(
            writer,
            "{}: originalSize: {} brotliSize: {}",
            entry.id,
            format_size(entry.size.original_size),
            format_size(entry.size.brotli_size)
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the report as pretty JSON with raw byte counts.
pub fn print_report_json<W: Write>(writer: &mut W, report: &SizeReport) -> io::Result<()> {
    debug!("Printing JSON report for {} entries", report.entries.len());
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
