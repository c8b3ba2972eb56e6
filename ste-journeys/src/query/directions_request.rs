use super::{OdRecord, QueryError};
use crate::{config::DirectionsSettings, normalize::ExpectedPeriod};

/// the time constraint of a request, in POSIX seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTime {
    ArriveBy(i64),
    DepartAt(i64),
}

/// query parameters for one Directions API call. built fresh for every
/// call and never modified; the API key is added by the client.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub units: String,
    pub time: RequestTime,
}

impl DirectionsRequest {
    /// AM trips go from home to school and must arrive by the bell; PM trips
    /// go from school to home and depart at the end bell.
    pub fn for_period(
        record: &OdRecord,
        index: usize,
        period: ExpectedPeriod,
        settings: &DirectionsSettings,
    ) -> Result<DirectionsRequest, QueryError> {
        let missing = || QueryError::MissingTimestamp { index, period };
        let (origin, destination, time) = match period {
            ExpectedPeriod::Am => (
                record.home_address.clone(),
                record.school_waypoint(),
                RequestTime::ArriveBy(record.am_arrival_timestamp.ok_or_else(missing)?),
            ),
            ExpectedPeriod::Pm => (
                record.school_waypoint(),
                record.home_address.clone(),
                RequestTime::DepartAt(record.pm_departure_timestamp.ok_or_else(missing)?),
            ),
        };
        Ok(DirectionsRequest {
            origin,
            destination,
            mode: settings.mode.clone(),
            units: settings.units.clone(),
            time,
        })
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let time = match self.time {
            RequestTime::ArriveBy(t) => ("arrival_time", t.to_string()),
            RequestTime::DepartAt(t) => ("departure_time", t.to_string()),
        };
        vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("mode", self.mode.clone()),
            ("units", self.units.clone()),
            time,
        ]
    }
}
