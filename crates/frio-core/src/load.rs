use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::transform::CombinedOutput;

/// Fixed name of the consolidated output file.
pub const OUTPUT_FILE_NAME: &str = "sitrad_consolidado.csv";

/// Writes the consolidated table as semicolon-delimited text, creating the
/// destination directory when absent. Returns the path written.
pub fn write_consolidated(output: &CombinedOutput, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(OUTPUT_FILE_NAME);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&path)?;
    writer.write_record(output.headers)?;
    for row in &output.rows {
        writer.write_record(row.cells().iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        rows = output.rows.len(),
        "Consolidated output written"
    );
    Ok(path)
}
