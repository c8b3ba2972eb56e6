//! batch Directions API queries producing the files the normalizer reads.
mod directions_client;
mod directions_request;
mod od_record;
mod query_error;
mod query_ops;
#[cfg(test)]
mod stub_server;

pub use directions_client::DirectionsClient;
pub use directions_request::{DirectionsRequest, RequestTime};
pub use od_record::{read_od_records, OdRecord};
pub use query_error::QueryError;
pub use query_ops::{annotate_unrouted_waypoints, query_batch};
