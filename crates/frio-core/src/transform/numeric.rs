use crate::model::{CellValue, StandardizedRow};
use crate::schema::Field;

/// Coerces the designated fields to a uniform float representation. Text is
/// trimmed and locale commas become decimal points; empty strings and NaN
/// tokens become null, as does anything that still fails to parse. Numeric
/// corruption is field-local and never drops the row.
pub fn normalize_numeric_fields(row: &mut StandardizedRow, fields: &[Field]) {
    for &field in fields {
        let normalized = match row.get(field) {
            CellValue::Null => continue,
            CellValue::Int(i) => CellValue::Float(*i as f64),
            CellValue::Float(f) => CellValue::Float(*f),
            CellValue::Text(raw) => parse_numeric_text(raw),
            CellValue::DateTime(_) => continue,
        };
        row.set(field, normalized);
    }
}

fn parse_numeric_text(raw: &str) -> CellValue {
    let cleaned = raw.trim().replace(',', ".");
    if cleaned.is_empty() || cleaned.eq_ignore_ascii_case("nan") {
        return CellValue::Null;
    }
    match cleaned.parse::<f64>() {
        Ok(value) => CellValue::Float(value),
        Err(_) => CellValue::Null,
    }
}
