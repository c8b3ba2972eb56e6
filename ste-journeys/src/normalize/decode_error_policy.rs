use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Enumerates alternative ways to handle a routed result
/// whose overview polyline cannot be decoded
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DecodeErrorPolicy {
    /// abort the batch
    #[default]
    Fail,
    /// log the error, emit an empty geometry and record the error in the notes
    Annotate,
}
