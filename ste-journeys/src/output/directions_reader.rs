use super::OutputError;
use crate::directions::DirectionsResult;
use std::{fs::File, io::BufReader, path::Path};

/// loads a batch file written by the query step: a JSON array with one
/// directions response per origin-destination pair. every element is
/// validated, and the first invalid one fails the read with its index.
pub fn read_directions_file(path: &Path) -> Result<Vec<DirectionsResult>, OutputError> {
    let values = read_json_array(path)?;
    log::info!("read {} directions responses from {path:?}", values.len());
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            DirectionsResult::from_json(value)
                .map_err(|source| OutputError::InvalidResult { index, source })
        })
        .collect()
}

pub fn read_json_array(path: &Path) -> Result<Vec<serde_json::Value>, OutputError> {
    let file = File::open(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(file))?;
    match value {
        serde_json::Value::Array(values) => Ok(values),
        _ => Err(OutputError::NotAnArray(path.to_path_buf())),
    }
}
