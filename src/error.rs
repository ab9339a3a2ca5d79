use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Extraction errors – structural problems inside a single export
// ---------------------------------------------------------------------------

/// Why the numeric data region could not be cut out of a raw table.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExtractError {
    #[error("marker '{marker}' not found")]
    MarkerNotFound { marker: String },

    /// Marker occurs more than once; `rows` holds every matching row index.
    #[error("marker '{marker}' occurs {} times (rows {rows:?})", .rows.len())]
    AmbiguousMarker { marker: String, rows: Vec<usize> },

    #[error("invalid data range: start row {start}, end row {end}")]
    InvalidRange { start: usize, end: usize },

    /// `row` is the zero-based index into the raw table (blank lines excluded).
    #[error("row {row}, column {column}: '{value}' is not a number")]
    DataFormat {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("no data rows between the markers")]
    EmptyData,
}

// ---------------------------------------------------------------------------
// Normalization errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NormalizeError {
    #[error("cannot normalize an empty spectrum")]
    EmptyData,

    #[error("cannot normalize: maximum Y value is {max}")]
    DegenerateData { max: f64 },
}

// ---------------------------------------------------------------------------
// Per-file pipeline errors
// ---------------------------------------------------------------------------

/// A failure while processing one input file. The batch records it and
/// moves on to the next file.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to extract data from {path}: {source}")]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },

    #[error("failed to normalize {path}: {source}")]
    Normalize {
        path: PathBuf,
        #[source]
        source: NormalizeError,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ProcessError {
    /// The file the error refers to (the output file for write errors).
    pub fn path(&self) -> &Path {
        match self {
            ProcessError::Read { path, .. }
            | ProcessError::Extract { path, .. }
            | ProcessError::Normalize { path, .. }
            | ProcessError::Write { path, .. } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// Batch-level errors – abort before any file is touched
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("no input files given; pass at least one .csv file with IR data")]
    NoInputFiles,
}
