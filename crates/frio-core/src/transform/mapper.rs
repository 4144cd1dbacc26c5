use tracing::warn;

use crate::layout::ResolvedLayout;
use crate::model::{CellValue, StandardizedRow};
use crate::schema::Field;

/// Source column position -> canonical field, located once per file.
#[derive(Debug, Default)]
pub struct ColumnIndexMap {
    pairs: Vec<(usize, Field)>,
}

impl ColumnIndexMap {
    /// Finds each mapped source column in the raw header row by exact title
    /// match. Columns the file does not carry are skipped with a warning;
    /// their canonical fields stay null for every row of the file.
    pub fn build(headers: &[String], resolved: &ResolvedLayout) -> Self {
        let mut pairs = Vec::with_capacity(resolved.layout.column_mapping.len());
        for &(source_name, field) in resolved.layout.column_mapping {
            match headers.iter().position(|h| h == source_name) {
                Some(idx) => pairs.push((idx, field)),
                None => warn!(
                    corridor = %resolved.corridor,
                    column = source_name,
                    "source column not present in file; field will be null"
                ),
            }
        }
        Self { pairs }
    }

    /// Projects one raw row onto the canonical schema. The result is always
    /// exactly the canonical width: unmapped fields stay null, the corridor
    /// label is stamped in, and null or whitespace-only source cells are
    /// never copied as empty text.
    pub fn map_row(&self, raw: &[CellValue], resolved: &ResolvedLayout) -> StandardizedRow {
        let mut row = StandardizedRow::empty();
        row.set(Field::Corridor, CellValue::Text(resolved.corridor.clone()));

        for &(source_idx, field) in &self.pairs {
            let Some(value) = raw.get(source_idx) else {
                continue;
            };
            match value {
                CellValue::Null => {}
                CellValue::Text(s) if s.trim().is_empty() => {}
                other => row.set(field, other.clone()),
            }
        }
        row
    }
}
