use crate::model::StandardizedRow;
use crate::schema::{output_headers, FIELD_COUNT};

/// Final consolidated output: one shared header plus every file's rows.
#[derive(Debug)]
pub struct CombinedOutput {
    pub headers: [&'static str; FIELD_COUNT],
    pub rows: Vec<StandardizedRow>,
}

/// Concatenates per-file row sets, preserving the file-processing order and
/// each file's own emission order. No resorting, no deduplication. Returns
/// `None` when no file produced any rows; the caller must skip the load
/// phase entirely in that case rather than write an empty file.
pub fn combine_files(files: Vec<Vec<StandardizedRow>>) -> Option<CombinedOutput> {
    let total: usize = files.iter().map(Vec::len).sum();
    if total == 0 {
        return None;
    }

    let mut rows = Vec::with_capacity(total);
    for file_rows in files {
        rows.extend(file_rows);
    }
    Some(CombinedOutput {
        headers: output_headers(),
        rows,
    })
}
