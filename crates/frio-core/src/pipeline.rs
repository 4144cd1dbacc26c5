// crates/frio-core/src/pipeline.rs

use std::path::Path;

use tracing::{info, warn};

use crate::config::PathsConfig;
use crate::error::{FileError, Result};
use crate::extract::{self, RawTable};
use crate::layout;
use crate::load;
use crate::model::StandardizedRow;
use crate::transform::{self, combine_files, FileTransform};

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_found: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    pub rows_written: usize,
    pub rows_discarded: usize,
    pub output_written: bool,
}

/// Drives a full run: discovery, per-file extraction and transformation,
/// concatenation, and the conditional load phase. Files are processed
/// strictly in order; file-level failures are logged and skipped, and only
/// configuration-class problems abort the run.
pub fn run(config: &PathsConfig) -> Result<RunSummary> {
    let files = extract::discover_input_files(&config.input_dir)?;
    info!(
        count = files.len(),
        dir = %config.input_dir.display(),
        "Discovered candidate files"
    );

    let mut summary = RunSummary {
        files_found: files.len(),
        ..RunSummary::default()
    };

    let mut per_file_rows: Vec<Vec<StandardizedRow>> = Vec::new();
    for path in &files {
        let outcome = match process_file(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(file = %path.display(), "Skipping file: {err}");
                summary.files_skipped += 1;
                continue;
            }
        };

        summary.rows_discarded += outcome.discarded_rows;
        if outcome.rows.is_empty() {
            warn!(file = %path.display(), "Transformation produced no rows; skipping file");
            summary.files_skipped += 1;
        } else {
            summary.files_processed += 1;
            per_file_rows.push(outcome.rows);
        }
    }

    match combine_files(per_file_rows) {
        Some(output) => {
            summary.rows_written = output.rows.len();
            load::write_consolidated(&output, &config.output_dir)?;
            summary.output_written = true;
        }
        None => {
            info!("No rows survived transformation; output file not written");
        }
    }

    Ok(summary)
}

fn process_file(path: &Path) -> std::result::Result<FileTransform, FileError> {
    let range = extract::open_sheet(path)?;

    let label = extract::read_metadata_cell(&range, layout::CORRIDOR_CELL)
        .ok_or(FileError::MissingCorridorLabel { cell: "B1" })?;
    let resolved = layout::resolve(&label).ok_or_else(|| FileError::UnknownCorridor {
        label: label.clone(),
    })?;

    info!(
        file = %path.display(),
        corridor = %resolved.corridor,
        "Identified source layout"
    );

    let RawTable { headers, rows } = extract::read_table(&range, resolved.layout.header_row);
    let outcome = transform::standardize_rows(&headers, &rows, &resolved);

    if outcome.discarded_rows > 0 {
        warn!(
            corridor = %resolved.corridor,
            discarded = outcome.discarded_rows,
            "Rows dropped for invalid timestamps"
        );
    }
    Ok(outcome)
}
