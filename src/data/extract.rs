use std::ops::Range;

use crate::config::{Extraction, MarkerPolicy};
use crate::error::ExtractError;

use super::model::{RawRow, RawTable, Spectrum};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Cut the numeric block out of a raw export and type it as `f64`.
///
/// The returned spectrum holds the rows strictly between the start and end
/// markers (or between the fixed head/tail skips), indexed from zero.
pub fn extract(table: &RawTable, extraction: &Extraction) -> Result<Spectrum, ExtractError> {
    let range = match extraction {
        Extraction::Markers { start, end, policy } => marker_range(table, start, end, *policy)?,
        Extraction::FixedRows {
            skip_head,
            skip_tail,
        } => fixed_range(table, *skip_head, *skip_tail)?,
    };
    log::debug!("data rows {}..{} of {}", range.start, range.end, table.len());
    to_spectrum(&table.rows[range.clone()], range.start)
}

// ---------------------------------------------------------------------------
// Locating the data block
// ---------------------------------------------------------------------------

/// Row range strictly between the two markers.
pub fn marker_range(
    table: &RawTable,
    start_marker: &str,
    end_marker: &str,
    policy: MarkerPolicy,
) -> Result<Range<usize>, ExtractError> {
    let (start, end) = match policy {
        MarkerPolicy::Strict => (
            unique_marker(table, start_marker)?,
            unique_marker(table, end_marker)?,
        ),
        MarkerPolicy::First => {
            let start = first_marker(table, start_marker)?;
            let ends = table.marker_rows(end_marker);
            let Some(&first_end) = ends.first() else {
                return Err(ExtractError::MarkerNotFound {
                    marker: end_marker.to_string(),
                });
            };
            // Prefer an end marker after the start; otherwise report the bad order.
            let end = ends.iter().copied().find(|&e| e > start).unwrap_or(first_end);
            (start, end)
        }
    };

    if end <= start {
        return Err(ExtractError::InvalidRange { start, end });
    }
    if end == start + 1 {
        return Err(ExtractError::EmptyData);
    }
    Ok(start + 1..end)
}

fn unique_marker(table: &RawTable, marker: &str) -> Result<usize, ExtractError> {
    let rows = table.marker_rows(marker);
    match rows.as_slice() {
        [] => Err(ExtractError::MarkerNotFound {
            marker: marker.to_string(),
        }),
        [row] => Ok(*row),
        _ => Err(ExtractError::AmbiguousMarker {
            marker: marker.to_string(),
            rows,
        }),
    }
}

fn first_marker(table: &RawTable, marker: &str) -> Result<usize, ExtractError> {
    table
        .rows
        .iter()
        .position(|row| row.x.trim() == marker)
        .ok_or_else(|| ExtractError::MarkerNotFound {
            marker: marker.to_string(),
        })
}

/// Row range left after dropping `skip_head` leading and `skip_tail`
/// trailing rows.
pub fn fixed_range(
    table: &RawTable,
    skip_head: usize,
    skip_tail: usize,
) -> Result<Range<usize>, ExtractError> {
    let end = table.len().saturating_sub(skip_tail);
    if skip_head + skip_tail > table.len() {
        return Err(ExtractError::InvalidRange {
            start: skip_head,
            end,
        });
    }
    if skip_head == end {
        return Err(ExtractError::EmptyData);
    }
    Ok(skip_head..end)
}

// ---------------------------------------------------------------------------
// Typing
// ---------------------------------------------------------------------------

fn to_spectrum(rows: &[RawRow], first_row: usize) -> Result<Spectrum, ExtractError> {
    let mut x = Vec::with_capacity(rows.len());
    let mut y = Vec::with_capacity(rows.len());
    for (offset, row) in rows.iter().enumerate() {
        let row_no = first_row + offset;
        x.push(parse_field(&row.x, row_no, "X")?);
        y.push(parse_field(&row.y, row_no, "Y")?);
    }
    Ok(Spectrum { x, y })
}

fn parse_field(value: &str, row: usize, column: &'static str) -> Result<f64, ExtractError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ExtractError::DataFormat {
            row,
            column,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_END_MARKER, DEFAULT_START_MARKER};

    fn table(rows: &[(&str, &str)]) -> RawTable {
        RawTable::new(rows.iter().map(|&(x, y)| RawRow::new(x, y)).collect())
    }

    fn strict() -> Extraction {
        Extraction::default()
    }

    fn lenient() -> Extraction {
        Extraction::Markers {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
            policy: MarkerPolicy::First,
        }
    }

    fn vendor_table() -> RawTable {
        table(&[
            ("TITLE", "KBr pellet"),
            ("DATA TYPE", "INFRARED SPECTRUM"),
            ("XYDATA", ""),
            ("1000", "0.2"),
            ("999", "0.5"),
            ("998", "0.1"),
            ("##### Extended Information", ""),
            ("[Comments]", ""),
        ])
    }

    #[test]
    fn extracts_rows_between_markers() {
        let sp = extract(&vendor_table(), &strict()).unwrap();
        assert_eq!(sp.x, vec![1000.0, 999.0, 998.0]);
        assert_eq!(sp.y, vec![0.2, 0.5, 0.1]);
    }

    #[test]
    fn missing_start_marker() {
        let t = table(&[("1000", "0.2"), ("##### Extended Information", "")]);
        assert_eq!(
            extract(&t, &strict()),
            Err(ExtractError::MarkerNotFound {
                marker: "XYDATA".to_string()
            })
        );
    }

    #[test]
    fn missing_end_marker() {
        let t = table(&[("XYDATA", ""), ("1000", "0.2")]);
        assert!(matches!(
            extract(&t, &strict()),
            Err(ExtractError::MarkerNotFound { marker }) if marker == DEFAULT_END_MARKER
        ));
    }

    #[test]
    fn duplicate_start_marker_is_ambiguous_when_strict() {
        let t = table(&[
            ("XYDATA", ""),
            ("1000", "0.2"),
            ("XYDATA", ""),
            ("999", "0.5"),
            ("##### Extended Information", ""),
        ]);
        assert_eq!(
            extract(&t, &strict()),
            Err(ExtractError::AmbiguousMarker {
                marker: "XYDATA".to_string(),
                rows: vec![0, 2],
            })
        );
    }

    #[test]
    fn duplicate_markers_resolve_to_first_when_lenient() {
        let t = table(&[
            ("##### Extended Information", ""),
            ("XYDATA", ""),
            ("1000", "0.2"),
            ("##### Extended Information", ""),
            ("XYDATA", ""),
            ("##### Extended Information", ""),
        ]);
        let sp = extract(&t, &lenient()).unwrap();
        assert_eq!(sp.x, vec![1000.0]);
    }

    #[test]
    fn end_before_start_is_invalid_range() {
        let t = table(&[
            ("##### Extended Information", ""),
            ("1000", "0.2"),
            ("XYDATA", ""),
        ]);
        assert_eq!(
            extract(&t, &strict()),
            Err(ExtractError::InvalidRange { start: 2, end: 0 })
        );
        assert_eq!(
            extract(&t, &lenient()),
            Err(ExtractError::InvalidRange { start: 2, end: 0 })
        );
    }

    #[test]
    fn adjacent_markers_give_empty_data() {
        let t = table(&[("XYDATA", ""), ("##### Extended Information", "")]);
        assert_eq!(extract(&t, &strict()), Err(ExtractError::EmptyData));
    }

    #[test]
    fn non_numeric_value_reports_row_and_column() {
        let t = table(&[
            ("XYDATA", ""),
            ("1000", "0.2"),
            ("999", "n/a"),
            ("##### Extended Information", ""),
        ]);
        assert_eq!(
            extract(&t, &strict()),
            Err(ExtractError::DataFormat {
                row: 2,
                column: "Y",
                value: "n/a".to_string(),
            })
        );
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let t = table(&[
            ("XYDATA ", ""),
            (" 1000", " 0.2 "),
            ("##### Extended Information", ""),
        ]);
        let sp = extract(&t, &strict()).unwrap();
        assert_eq!(sp.y, vec![0.2]);
    }

    #[test]
    fn custom_markers() {
        let t = table(&[("BEGIN", ""), ("5", "1"), ("END", "")]);
        let extraction = Extraction::Markers {
            start: "BEGIN".to_string(),
            end: "END".to_string(),
            policy: MarkerPolicy::Strict,
        };
        assert_eq!(extract(&t, &extraction).unwrap().x, vec![5.0]);
    }

    #[test]
    fn fixed_rows_skip_head_and_tail() {
        let t = table(&[
            ("meta", ""),
            ("meta", ""),
            ("10", "1"),
            ("9", "2"),
            ("footer", ""),
        ]);
        let extraction = Extraction::FixedRows {
            skip_head: 2,
            skip_tail: 1,
        };
        let sp = extract(&t, &extraction).unwrap();
        assert_eq!(sp.x, vec![10.0, 9.0]);
    }

    #[test]
    fn fixed_rows_overlapping_skips() {
        let t = table(&[("1", "1"), ("2", "2")]);
        let overlap = Extraction::FixedRows {
            skip_head: 2,
            skip_tail: 1,
        };
        assert_eq!(
            extract(&t, &overlap),
            Err(ExtractError::InvalidRange { start: 2, end: 1 })
        );
        let exact = Extraction::FixedRows {
            skip_head: 1,
            skip_tail: 1,
        };
        assert_eq!(extract(&t, &exact), Err(ExtractError::EmptyData));
    }

    #[test]
    fn legacy_layout_uses_fixed_offsets() {
        let mut rows: Vec<RawRow> = (0..19).map(|i| RawRow::new(format!("h{i}"), "")).collect();
        rows.push(RawRow::new("4000", "0.9"));
        rows.extend((0..40).map(|i| RawRow::new(format!("f{i}"), "")));
        let sp = extract(&RawTable::new(rows), &Extraction::legacy()).unwrap();
        assert_eq!(sp.x, vec![4000.0]);
    }
}
