//! CSV export for dispatch allocations.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::dispatch::Allocation;

/// Column header for CSV allocation export.
const HEADER: &str = "order,name,kind,p_mw";

/// Exports allocations to a CSV file at the given path.
///
/// Writes a header row followed by one data row per allocation in dispatch
/// order. Produces identical bytes for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(allocations: &[Allocation], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(allocations, buf)
}

/// Writes allocations as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(allocations: &[Allocation], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for (order, a) in allocations.iter().enumerate() {
        wtr.write_record(&[
            order.to_string(),
            a.name.clone(),
            a.kind.to_string(),
            format!("{:.4}", a.power_mw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
