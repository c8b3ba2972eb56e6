use crate::normalize::ExpectedPeriod;

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("no API key configured, set auth.gkey or STE_JOURNEYS__AUTH__GKEY")]
    MissingApiKey,
    #[error("OD record {index} has no {period} timestamp")]
    MissingTimestamp {
        index: usize,
        period: ExpectedPeriod,
    },
    #[error("directions request failed after {attempts} attempt(s) with HTTP status {status}")]
    UnexpectedStatus { status: u16, attempts: u32 },
    #[error("directions request failed: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },
    #[error("failure reading OD records: {0}")]
    OdRecordError(String),
    #[error("directions response is not a JSON object: {0}")]
    InvalidResponse(String),
    /// a batch stopped early. `completed` holds the annotated responses of
    /// every record before `index`.
    #[error("batch stopped at OD record {index} after {} responses: {source}", .completed.len())]
    BatchInterrupted {
        index: usize,
        completed: Vec<serde_json::Value>,
        source: Box<QueryError>,
    },
}
