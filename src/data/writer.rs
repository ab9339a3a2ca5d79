use std::io::Write;
use std::path::{Path, PathBuf};

use super::model::Spectrum;

/// File-name suffix marking output that has already been normalized.
pub const NORMALIZED_SUFFIX: &str = "_normalized.csv";

/// `dir/name.csv` → `dir/name_normalized.csv`.
pub fn normalized_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{NORMALIZED_SUFFIX}"))
}

/// Write `spectrum` as headerless `x,y` rows.
pub fn write_spectrum<W: Write>(writer: W, spectrum: &Spectrum) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for point in spectrum.points() {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

/// [`write_spectrum`] to a new (or truncated) file.
pub fn write_spectrum_file(path: &Path, spectrum: &Spectrum) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_spectrum(file, spectrum)
}
