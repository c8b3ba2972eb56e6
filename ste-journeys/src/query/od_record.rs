use super::QueryError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// one student-to-school origin-destination pair. timestamps are POSIX
/// seconds for the school day being modeled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OdRecord {
    pub home_address: String,
    pub school_lat: f64,
    pub school_lon: f64,
    /// latest arrival at school
    #[serde(default)]
    pub am_arrival_timestamp: Option<i64>,
    /// earliest departure from school
    #[serde(default)]
    pub pm_departure_timestamp: Option<i64>,
}

impl OdRecord {
    /// the school location as a `lat,lon` waypoint
    pub fn school_waypoint(&self) -> String {
        format!("{},{}", self.school_lat, self.school_lon)
    }
}

/// reads OD records from a CSV file with a header row. extra columns are ignored.
pub fn read_od_records(od_file: &Path) -> Result<Vec<OdRecord>, QueryError> {
    let reader = csv::ReaderBuilder::new().from_path(od_file).map_err(|e| {
        QueryError::OdRecordError(format!("failure reading '{od_file:?}': {e}"))
    })?;
    reader
        .into_deserialize::<OdRecord>()
        .enumerate()
        .map(|(idx, r)| {
            r.map_err(|e| QueryError::OdRecordError(format!("failure reading OD row {idx}: {e}")))
        })
        .collect()
}
