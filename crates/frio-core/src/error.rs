// crates/frio-core/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Run-aborting failures. Everything here stops the pipeline outright;
/// per-file problems are `FileError` and only skip the offending file.
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file {path} could not be read: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration file {path} is not valid JSON: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input directory does not exist: {0}")]
    MissingInputDir(PathBuf),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, EtlError>;

/// Failures scoped to one source file. The caller logs these and continues
/// with the remaining files.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("workbook could not be opened: {0}")]
    Unreadable(#[from] calamine::Error),

    #[error("workbook contains no worksheets")]
    NoWorksheet,

    #[error("no corridor label in metadata cell {cell}")]
    MissingCorridorLabel { cell: &'static str },

    #[error("corridor label '{label}' does not match any registered layout")]
    UnknownCorridor { label: String },
}
