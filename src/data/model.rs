use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RawTable – the export as read, before any typing
// ---------------------------------------------------------------------------

/// One row of a vendor export. Either field may hold metadata text, a
/// sentinel marker, or a number still in text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub x: String,
    pub y: String,
}

impl RawRow {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// All rows of one export, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of every row whose trimmed `X` field equals `marker`.
    pub fn marker_rows(&self, marker: &str) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.x.trim() == marker)
            .map(|(i, _)| i)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// DataPoint – one (wavenumber, transmission) pair on disk
// ---------------------------------------------------------------------------

/// Record layout of the normalized output file (no header).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// Spectrum – the typed numeric table
// ---------------------------------------------------------------------------

/// A single spectrum.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spectrum {
    /// Wavenumber axis (x).
    pub x: Vec<f64>,
    /// Transmission axis (y) – same length as `x`.
    pub y: Vec<f64>,
}

impl Spectrum {
    pub fn from_points(points: impl IntoIterator<Item = DataPoint>) -> Self {
        let (x, y) = points.into_iter().map(|p| (p.x, p.y)).unzip();
        Self { x, y }
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = DataPoint> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(&x, &y)| DataPoint { x, y })
    }

    /// Largest Y value, ignoring NaN. `None` for an empty spectrum.
    pub fn max_y(&self) -> Option<f64> {
        self.y.iter().copied().reduce(f64::max)
    }

    /// Data-frame style view: head, tail, and shape.
    pub fn preview(&self) -> Preview<'_> {
        Preview {
            spectrum: self,
            edge_rows: 5,
        }
    }
}

/// Display adapter printing the first and last rows of a spectrum.
pub struct Preview<'a> {
    spectrum: &'a Spectrum,
    edge_rows: usize,
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sp = self.spectrum;
        let n = sp.len();
        let idx_width = n.saturating_sub(1).to_string().len();

        writeln!(f, "{:>idx_width$}  {:>12}  {:>12}", "", "X", "Y")?;
        let write_row = |f: &mut fmt::Formatter<'_>, i: usize| {
            writeln!(f, "{i:>idx_width$}  {:>12.6}  {:>12.6}", sp.x[i], sp.y[i])
        };

        if n <= self.edge_rows * 2 {
            for i in 0..n {
                write_row(f, i)?;
            }
        } else {
            for i in 0..self.edge_rows {
                write_row(f, i)?;
            }
            writeln!(f, "{:>idx_width$}  {:>12}  {:>12}", "..", "...", "...")?;
            for i in n - self.edge_rows..n {
                write_row(f, i)?;
            }
        }
        write!(f, "[{n} rows x 2 columns]")
    }
}
