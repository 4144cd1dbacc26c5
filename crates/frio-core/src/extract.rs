//! Workbook reading and input discovery.

use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader};
use tracing::warn;

use crate::error::{FileError, Result};
use crate::model::CellValue;

/// Raw contents of one source worksheet: the trimmed header row and every
/// row below it as typed cells, index-aligned with the headers.
#[derive(Debug)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

/// Candidate source files: `*.xlsx` directly under the input directory,
/// sorted for a deterministic processing order.
pub fn discover_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = input_dir.join("*.xlsx");
    let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(path),
            Ok(_) => None,
            Err(err) => {
                warn!("could not read path from glob pattern: {err}");
                None
            }
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Opens the workbook and returns its first worksheet as a cell range.
pub fn open_sheet(path: &Path) -> std::result::Result<Range<Data>, FileError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range_at(0).ok_or(FileError::NoWorksheet)??;
    Ok(range)
}

/// Value of a metadata cell, if present and non-blank. The coordinate is
/// absolute and 0-based.
pub fn read_metadata_cell(range: &Range<Data>, cell: (u32, u32)) -> Option<String> {
    let value = range.get_value(cell)?;
    if matches!(value, Data::Empty) {
        return None;
    }
    let text = value.to_string().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Reads the header row (`header_row` is 1-based) and all data rows below
/// it. Blank header cells get `Col_<i>` placeholder names so that index
/// alignment with the data rows survives.
pub fn read_table(range: &Range<Data>, header_row: u32) -> RawTable {
    let header_idx = header_row.saturating_sub(1);
    let Some((end_row, end_col)) = range.end() else {
        return RawTable {
            headers: Vec::new(),
            rows: Vec::new(),
        };
    };

    let mut headers = Vec::with_capacity(end_col as usize + 1);
    for col in 0..=end_col {
        let name = match range.get_value((header_idx, col)) {
            None | Some(Data::Empty) => format!("Col_{col}"),
            Some(value) => {
                let trimmed = value.to_string().trim().to_string();
                if trimmed.is_empty() {
                    format!("Col_{col}")
                } else {
                    trimmed
                }
            }
        };
        headers.push(name);
    }

    let mut rows = Vec::new();
    for row in (header_idx + 1)..=end_row {
        let mut cells = Vec::with_capacity(headers.len());
        for col in 0..=end_col {
            cells.push(convert_cell(range.get_value((row, col))));
        }
        rows.push(cells);
    }

    RawTable { headers, rows }
}

fn convert_cell(value: Option<&Data>) -> CellValue {
    match value {
        None | Some(Data::Empty) | Some(Data::Error(_)) => CellValue::Null,
        Some(Data::String(s)) => CellValue::Text(s.clone()),
        Some(Data::Float(f)) => CellValue::Float(*f),
        Some(Data::Int(i)) => CellValue::Int(*i),
        Some(Data::Bool(b)) => CellValue::Text(b.to_string()),
        Some(Data::DateTime(dt)) => match dt.as_datetime() {
            Some(naive) => CellValue::DateTime(naive),
            None => CellValue::Null,
        },
        Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => CellValue::Text(s.clone()),
    }
}
