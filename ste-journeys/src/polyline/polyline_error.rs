#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PolylineError {
    #[error("invalid polyline character '{character}' at position {index}")]
    InvalidCharacter { character: char, index: usize },
    #[error("polyline ends inside the value starting at position {index}")]
    TruncatedValue { index: usize },
    #[error("polyline has a latitude without a matching longitude at position {index}")]
    MissingLongitude { index: usize },
    #[error("polyline value starting at position {index} overflows a 64-bit integer")]
    ValueOverflow { index: usize },
}
