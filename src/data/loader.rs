use std::io::Read;
use std::path::Path;

use super::model::{DataPoint, RawRow, RawTable, Spectrum};

// ---------------------------------------------------------------------------
// Vendor export → RawTable
// ---------------------------------------------------------------------------

/// Reader settings for vendor exports: no header row, rows of any width.
fn export_reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true);
    builder
}

fn lossy_field(record: &csv::ByteRecord, i: usize) -> String {
    record
        .get(i)
        .map(|b| String::from_utf8_lossy(b).into_owned())
        .unwrap_or_default()
}

impl RawTable {
    /// Parse an export from any reader. Only the first two fields of each
    /// row are kept; a missing second field becomes an empty string.
    ///
    /// Exports are not always UTF-8 (Latin-1 `µ` or `°` in metadata), so
    /// invalid bytes are replaced rather than failing the whole file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = export_reader_builder().from_reader(reader);
        let mut rows = Vec::new();
        for record in reader.byte_records() {
            let record = record?;
            rows.push(RawRow::new(
                lossy_field(&record, 0),
                lossy_field(&record, 1),
            ));
        }
        Ok(RawTable::new(rows))
    }

    /// Read an export from disk.
    pub fn from_path(path: &Path) -> Result<Self, csv::Error> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }
}

// ---------------------------------------------------------------------------
// Normalized output → Spectrum
// ---------------------------------------------------------------------------

/// Read a headerless two-column numeric file, as produced by
/// [`write_spectrum`](super::writer::write_spectrum). No marker stripping.
pub fn read_spectrum<R: Read>(reader: R) -> Result<Spectrum, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let points = reader
        .deserialize::<DataPoint>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Spectrum::from_points(points))
}

/// [`read_spectrum`] from a file path.
pub fn read_spectrum_file(path: &Path) -> Result<Spectrum, csv::Error> {
    let file = std::fs::File::open(path)?;
    read_spectrum(file)
}
