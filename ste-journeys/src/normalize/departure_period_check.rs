use super::{ExpectedPeriod, ItineraryRecord};

/// note appended when an AM batch record appears to depart in the afternoon
pub const PM_DEPARTURE_NOTE: &str = "PM Departure";

/// a data-quality check comparing a record's departure time text with the
/// period its batch was queried for.
pub trait DeparturePeriodCheck {
    /// returns a note to append to the record when the departure text looks
    /// inconsistent with the expected period.
    fn check(&self, departure_time: &str, expected: ExpectedPeriod) -> Option<String>;
}

/// flags AM batch records whose departure text contains the substring `pm`.
///
/// this is a heuristic over free-form text, not a time parse: the match is
/// case-sensitive, so `"3:45PM"` is not flagged, and nothing is checked for PM
/// batches. existing exports were produced with exactly this rule; a stricter
/// check belongs in a separate [`DeparturePeriodCheck`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringPeriodCheck;

impl DeparturePeriodCheck for SubstringPeriodCheck {
    fn check(&self, departure_time: &str, expected: ExpectedPeriod) -> Option<String> {
        match expected {
            ExpectedPeriod::Am if departure_time.contains("pm") => {
                Some(String::from(PM_DEPARTURE_NOTE))
            }
            _ => None,
        }
    }
}

/// applies [`SubstringPeriodCheck`] to a record.
pub fn apply_am_pm_heuristic(
    record: ItineraryRecord,
    expected_period: Option<ExpectedPeriod>,
) -> ItineraryRecord {
    apply_period_check(record, expected_period, &SubstringPeriodCheck)
}

/// applies any [`DeparturePeriodCheck`] to a record. records without a
/// departure time, and batches without a known period, are returned unchanged.
pub fn apply_period_check(
    mut record: ItineraryRecord,
    expected_period: Option<ExpectedPeriod>,
    check: &dyn DeparturePeriodCheck,
) -> ItineraryRecord {
    let note = match (expected_period, record.departure_time()) {
        (Some(expected), Some(departure)) => check.check(departure, expected),
        _ => None,
    };
    if let Some(note) = note {
        record.append_note(&note);
    }
    record
}
