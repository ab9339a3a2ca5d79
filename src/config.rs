// ---------------------------------------------------------------------------
// Run configuration built from the command line
// ---------------------------------------------------------------------------

/// Row literal that precedes the numeric block in vendor exports.
pub const DEFAULT_START_MARKER: &str = "XYDATA";
/// Row literal that terminates the numeric block (exclusive).
pub const DEFAULT_END_MARKER: &str = "##### Extended Information";

/// Metadata rows before the data block in the fixed legacy layout.
pub const LEGACY_HEADER_ROWS: usize = 19;
/// Metadata rows after the data block in the fixed legacy layout.
pub const LEGACY_FOOTER_ROWS: usize = 40;

/// How duplicate sentinel rows are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerPolicy {
    /// Each marker must occur exactly once.
    #[default]
    Strict,
    /// Use the first start marker and the first end marker after it.
    First,
}

/// Where the numeric block sits inside a raw table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Markers {
        start: String,
        end: String,
        policy: MarkerPolicy,
    },
    /// Drop a fixed number of rows at both ends, no marker search.
    FixedRows { skip_head: usize, skip_tail: usize },
}

impl Default for Extraction {
    fn default() -> Self {
        Extraction::Markers {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
            policy: MarkerPolicy::Strict,
        }
    }
}

impl Extraction {
    pub fn legacy() -> Self {
        Extraction::FixedRows {
            skip_head: LEGACY_HEADER_ROWS,
            skip_tail: LEGACY_FOOTER_ROWS,
        }
    }
}

/// Axis bounds for the viewer. `x_limits` may be descending (start > end),
/// which is the usual orientation for IR spectra.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    pub x_limits: (f64, f64),
    /// `None` means auto-scale from the data.
    pub y_limits: Option<(f64, f64)>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            x_limits: (4000.0, 500.0),
            y_limits: None,
        }
    }
}

impl PlotConfig {
    /// Whether the x axis runs from high to low wavenumbers.
    pub fn x_descending(&self) -> bool {
        self.x_limits.0 > self.x_limits.1
    }
}
