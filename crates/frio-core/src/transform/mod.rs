//! The transformation engine: projection onto the canonical schema, calendar
//! derivation, numeric normalization, and batch concatenation.

mod combine;
mod mapper;
mod numeric;
mod temporal;

pub use combine::{combine_files, CombinedOutput};
pub use mapper::ColumnIndexMap;
pub use numeric::normalize_numeric_fields;
pub use temporal::derive_calendar_fields;

use crate::layout::ResolvedLayout;
use crate::model::{CellValue, StandardizedRow};
use crate::schema;

/// Standardized rows of one source file plus row-level diagnostics.
#[derive(Debug, Default)]
pub struct FileTransform {
    pub rows: Vec<StandardizedRow>,
    /// Rows dropped because their primary timestamp could not be
    /// interpreted.
    pub discarded_rows: usize,
}

/// Runs the full row pipeline for one file. The column index map is built
/// once; every raw row is then mapped, calendar-derived, and numerically
/// normalized. A corrupt timestamp drops the row; all other corruption is
/// field-local and degrades to null.
pub fn standardize_rows(
    headers: &[String],
    raw_rows: &[Vec<CellValue>],
    resolved: &ResolvedLayout,
) -> FileTransform {
    let index_map = ColumnIndexMap::build(headers, resolved);

    let mut result = FileTransform::default();
    for raw in raw_rows {
        let mut row = index_map.map_row(raw, resolved);
        if !derive_calendar_fields(&mut row) {
            result.discarded_rows += 1;
            continue;
        }
        normalize_numeric_fields(&mut row, schema::numeric_fields());
        result.rows.push(row);
    }
    result
}
