use crate::polyline::PolylineError;

#[derive(thiserror::Error, Debug)]
pub enum NormalizeError {
    #[error("failure decoding overview polyline of result {index}: {source}")]
    DecodeError {
        index: usize,
        source: PolylineError,
    },
}
