mod csv_writer;
mod directions_reader;
mod geojson_writer;
mod itinerary_row;
mod output_error;

pub use csv_writer::write_csv;
pub use directions_reader::{read_directions_file, read_json_array};
pub use geojson_writer::{feature_collection, write_geojson, write_json_array};
pub use itinerary_row::ItineraryRow;
pub use output_error::OutputError;

use std::{fs::File, path::Path};

/// creates the output file, refusing to replace an existing one unless `overwrite` is set
fn create_output_file(path: &Path, overwrite: bool) -> Result<File, OutputError> {
    if overwrite {
        File::create(path).map_err(|source| OutputError::Io {
            path: path.to_path_buf(),
            source,
        })
    } else {
        File::create_new(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::AlreadyExists => OutputError::FileExists(path.to_path_buf()),
            _ => OutputError::Io {
                path: path.to_path_buf(),
                source,
            },
        })
    }
}
