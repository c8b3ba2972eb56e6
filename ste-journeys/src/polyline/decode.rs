//! decoder for the encoded polyline format used by the Google Directions API.
//! see [https://developers.google.com/maps/documentation/utilities/polylinealgorithm].
use super::PolylineError;
use geo::{Coord, LineString};

/// number of decimal digits encoded in an overview polyline
pub const GOOGLE_POLYLINE_PRECISION: u32 = 5;

const CHAR_OFFSET: u8 = 63;
const CHUNK_MASK: i64 = 0x1f;
const CONTINUATION_BIT: i64 = 0x20;
const MAX_SHIFT: u32 = 60;

/// decodes an encoded polyline into a [`LineString`].
///
/// the encoding stores (lat, lon) pairs, but the resulting coordinates follow
/// the GeoJSON convention with x = longitude and y = latitude.
///
/// # Arguments
///
/// * `encoded` - the encoded polyline string
/// * `precision` - number of decimal digits in the encoding, 5 for Google
///
/// # Returns
///
/// * the decoded vertices, or an error if the string is malformed
pub fn decode_polyline(encoded: &str, precision: u32) -> Result<LineString<f64>, PolylineError> {
    let factor = 10_f64.powi(precision as i32);
    let bytes = encoded.as_bytes();
    let mut coords: Vec<Coord<f64>> = vec![];
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut index = 0;
    while index < bytes.len() {
        let start = index;
        let (delta_lat, next) = decode_value(bytes, index)?;
        if next >= bytes.len() {
            return Err(PolylineError::MissingLongitude { index: next });
        }
        let lon_start = next;
        let (delta_lon, next) = decode_value(bytes, lon_start)?;
        lat = lat
            .checked_add(delta_lat)
            .ok_or(PolylineError::ValueOverflow { index: start })?;
        lon = lon
            .checked_add(delta_lon)
            .ok_or(PolylineError::ValueOverflow { index: lon_start })?;
        index = next;
        coords.push(Coord {
            x: lon as f64 / factor,
            y: lat as f64 / factor,
        });
    }
    Ok(LineString::new(coords))
}

/// reads one zig-zag encoded varint starting at `start`, returning the
/// signed value and the position after its last chunk.
fn decode_value(bytes: &[u8], start: usize) -> Result<(i64, usize), PolylineError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;
    let mut index = start;
    loop {
        let byte = *bytes
            .get(index)
            .ok_or(PolylineError::TruncatedValue { index: start })?;
        if !(CHAR_OFFSET..=CHAR_OFFSET + 63).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                character: byte as char,
                index,
            });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::ValueOverflow { index: start });
        }
        let chunk = (byte - CHAR_OFFSET) as i64;
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        index += 1;
        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }
    let value = if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    };
    Ok((value, index))
}
