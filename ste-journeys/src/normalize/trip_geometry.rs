use crate::{
    directions::RoutedResult,
    polyline::{decode_polyline, PolylineError, GOOGLE_POLYLINE_PRECISION},
};
use geo::LineString;

/// geometry of one output feature
#[derive(Debug, Clone, PartialEq)]
pub enum TripGeometry {
    /// decoded overview line, x = longitude, y = latitude
    Line(LineString<f64>),
    /// written as an empty GeometryCollection
    Empty,
}

impl TripGeometry {
    pub fn to_geojson(&self) -> geojson::Geometry {
        match self {
            TripGeometry::Line(line) => geojson::Geometry::new(geojson::Value::from(line)),
            TripGeometry::Empty => geojson::Geometry::new(geojson::Value::GeometryCollection(vec![])),
        }
    }
}

/// decodes the overview polyline of the first route into (lon, lat) vertices
pub fn decode_overview_geometry(result: &RoutedResult) -> Result<LineString<f64>, PolylineError> {
    decode_polyline(&result.overview_polyline, GOOGLE_POLYLINE_PRECISION)
}
