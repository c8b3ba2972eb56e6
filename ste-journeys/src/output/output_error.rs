use crate::directions::DirectionsError;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("output file {0:?} already exists, pass --overwrite to replace it")]
    FileExists(PathBuf),
    #[error("failure accessing {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failure encoding or decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("expected a JSON array of directions responses in {0:?}")]
    NotAnArray(PathBuf),
    #[error("invalid directions response at index {index}: {source}")]
    InvalidResult {
        index: usize,
        source: DirectionsError,
    },
}
