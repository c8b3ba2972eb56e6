mod decode;
mod polyline_error;

pub use decode::{decode_polyline, GOOGLE_POLYLINE_PRECISION};
pub use polyline_error::PolylineError;
