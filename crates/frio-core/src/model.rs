use std::fmt;

use chrono::NaiveDateTime;

use crate::schema::{Field, FIELD_COUNT};

/// A single typed cell, as read from a source sheet or produced by the
/// transformation engine.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// One output row, aligned slot-for-slot with the canonical schema. Rows are
/// built per source row and never mutated once handed to the accumulator.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardizedRow {
    cells: [CellValue; FIELD_COUNT],
}

impl StandardizedRow {
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|_| CellValue::Null),
        }
    }

    pub fn get(&self, field: Field) -> &CellValue {
        &self.cells[field.index()]
    }

    pub fn set(&mut self, field: Field, value: CellValue) {
        self.cells[field.index()] = value;
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

impl Default for StandardizedRow {
    fn default() -> Self {
        Self::empty()
    }
}
