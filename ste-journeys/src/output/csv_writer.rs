use super::{create_output_file, ItineraryRow, OutputError};
use crate::normalize::ItineraryRecord;
use std::path::Path;

/// writes one row per record, in record order, with a header row
pub fn write_csv(
    records: &[ItineraryRecord],
    path: &Path,
    overwrite: bool,
) -> Result<(), OutputError> {
    let file = create_output_file(path, overwrite)?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(ItineraryRow::from(record))?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} rows to {path:?}", records.len());
    Ok(())
}
