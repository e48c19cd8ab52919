//! Utility functions for exporting the constant registry to files.
//!
//! The CSV layout is one header line followed by one row per constant, with
//! values written in full-precision scientific notation so a reader can
//! recover the exact `f64`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PhysCalcResult;
use crate::table::PhysicalConstant;

/// Column names of the CSV export.
pub const CSV_HEADER: &str = "symbol,name,value,unit,domain,derived";

/// Writes constants as CSV rows to any writer.
///
/// # Arguments
///
/// * `constants` - The constants to write, in output order.
/// * `writer` - Destination of the rows.
pub fn write_csv_to<W: Write>(
    constants: &[PhysicalConstant],
    writer: &mut W,
) -> std::io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;

    for constant in constants {
        writeln!(
            writer,
            "{},{},{:e},{},{},{}",
            constant.symbol,
            constant.name,
            constant.value,
            constant.unit,
            constant.domain,
            constant.derived
        )?;
    }

    Ok(())
}

/// Writes constants to a CSV file.
///
/// # Arguments
///
/// * `constants` - The constants to write.
/// * `filename` - The file to create or truncate.
///
/// # Returns
///
/// A `Result` indicating success or an I/O error.
pub fn write_csv(constants: &[PhysicalConstant], filename: &Path) -> PhysCalcResult<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    write_csv_to(constants, &mut writer)?;
    writer.flush()?;

    log::debug!("wrote {} constants to {}", constants.len(), filename.display());
    Ok(())
}

/// Writes constants to a file as a pretty-printed JSON array.
///
/// # Arguments
///
/// * `constants` - The constants to write.
/// * `filename` - The file to create or truncate.
///
/// # Returns
///
/// A `Result` indicating success, an I/O error or a serialisation error.
pub fn write_json(constants: &[PhysicalConstant], filename: &Path) -> PhysCalcResult<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, constants)?;
    writeln!(writer)?;
    writer.flush()?;

    log::debug!("wrote {} constants to {}", constants.len(), filename.display());
    Ok(())
}
