use super::{create_output_file, OutputError};
use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::json;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

const CRS84: &str = "urn:ogc:def:crs:OGC:1.3:CRS84";

/// wraps features in a named FeatureCollection with the CRS84 named crs member
pub fn feature_collection(features: Vec<Feature>, name: &str) -> FeatureCollection {
    let mut foreign_members = JsonObject::new();
    foreign_members.insert(String::from("name"), json!(name));
    foreign_members.insert(
        String::from("crs"),
        json!({"type": "name", "properties": {"name": CRS84}}),
    );
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    }
}

pub fn write_geojson(
    features: &[Feature],
    name: &str,
    path: &Path,
    overwrite: bool,
) -> Result<(), OutputError> {
    let collection = feature_collection(features.to_vec(), name);
    let mut writer = BufWriter::new(create_output_file(path, overwrite)?);
    serde_json::to_writer(&mut writer, &collection)?;
    flush(writer, path)?;
    log::info!("wrote {} features to {path:?}", features.len());
    Ok(())
}

/// writes raw JSON values as a single array, used for batch query results
pub fn write_json_array(
    values: &[serde_json::Value],
    path: &Path,
    overwrite: bool,
) -> Result<(), OutputError> {
    let mut writer = BufWriter::new(create_output_file(path, overwrite)?);
    serde_json::to_writer(&mut writer, values)?;
    flush(writer, path)?;
    log::info!("wrote {} responses to {path:?}", values.len());
    Ok(())
}

fn flush(mut writer: BufWriter<File>, path: &Path) -> Result<(), OutputError> {
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
