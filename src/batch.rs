use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Extraction;
use crate::data::extract::extract;
use crate::data::model::{RawTable, Spectrum};
use crate::data::normalize::normalize;
use crate::data::writer::{normalized_path, write_spectrum_file, NORMALIZED_SUFFIX};
use crate::error::{BatchError, ProcessError};

// ---------------------------------------------------------------------------
// Input classification
// ---------------------------------------------------------------------------

/// Why an input path was not processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not a `.csv` file (case-sensitive).
    InvalidExtension,
    /// Output of an earlier run.
    AlreadyNormalized,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::InvalidExtension => write!(f, "invalid file type (only .csv allowed)"),
            SkipReason::AlreadyNormalized => write!(f, "previously processed file"),
        }
    }
}

/// Decide whether `path` should be processed.
pub fn classify(path: &Path) -> Result<(), SkipReason> {
    if path.extension().and_then(|e| e.to_str()) != Some("csv") {
        return Err(SkipReason::InvalidExtension);
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    if name.ends_with(NORMALIZED_SUFFIX) {
        return Err(SkipReason::AlreadyNormalized);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Per-file pipeline
// ---------------------------------------------------------------------------

/// Settings shared by every file in a batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    pub extraction: Extraction,
}

/// A successfully converted input.
#[derive(Debug, Clone)]
pub struct ProcessedSpectrum {
    pub source: PathBuf,
    pub output: PathBuf,
    /// File name used as plot title and legend entry.
    pub name: String,
    pub spectrum: Spectrum,
}

/// read → extract → normalize → write for a single file.
pub fn process_file(path: &Path, options: &BatchOptions) -> Result<ProcessedSpectrum, ProcessError> {
    log::info!("Importing {}...", path.display());
    let raw = RawTable::from_path(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("{}: {} raw rows", path.display(), raw.len());

    let imported = extract(&raw, &options.extraction).map_err(|source| ProcessError::Extract {
        path: path.to_path_buf(),
        source,
    })?;

    let spectrum = normalize(&imported).map_err(|source| ProcessError::Normalize {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Normalized data for {}. Output:\n{}",
        path.display(),
        spectrum.preview()
    );

    let output = normalized_path(path);
    write_spectrum_file(&output, &spectrum).map_err(|source| ProcessError::Write {
        path: output.clone(),
        source,
    })?;
    log::info!("Saved normalized data to file {}", output.display());

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ProcessedSpectrum {
        source: path.to_path_buf(),
        output,
        name,
        spectrum,
    })
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

/// Outcome of a whole run, in input order within each list.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<ProcessedSpectrum>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
    pub failed: Vec<ProcessError>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Process every file in order. A failing file is recorded and the batch
/// continues; only an empty file list aborts.
pub fn run_batch<P: AsRef<Path>>(
    files: &[P],
    options: &BatchOptions,
) -> Result<BatchReport, BatchError> {
    if files.is_empty() {
        return Err(BatchError::NoInputFiles);
    }

    let mut report = BatchReport::default();
    for file in files {
        let path = file.as_ref();
        if let Err(reason) = classify(path) {
            log::warn!("Skipping {}: {reason}", path.display());
            report.skipped.push((path.to_path_buf(), reason));
            continue;
        }
        match process_file(path, options) {
            Ok(done) => report.processed.push(done),
            Err(e) => {
                log::error!("{e}");
                report.failed.push(e);
            }
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_csv() {
        assert_eq!(classify(Path::new("data/sample.csv")), Ok(()));
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(
            classify(Path::new("sample.txt")),
            Err(SkipReason::InvalidExtension)
        );
        assert_eq!(
            classify(Path::new("sample.CSV")),
            Err(SkipReason::InvalidExtension)
        );
        assert_eq!(
            classify(Path::new("sample")),
            Err(SkipReason::InvalidExtension)
        );
    }

    #[test]
    fn skips_previous_output() {
        assert_eq!(
            classify(Path::new("sample_normalized.csv")),
            Err(SkipReason::AlreadyNormalized)
        );
    }

    #[test]
    fn empty_batch_is_an_error() {
        let files: [&Path; 0] = [];
        assert!(matches!(
            run_batch(&files, &BatchOptions::default()),
            Err(BatchError::NoInputFiles)
        ));
    }
}
