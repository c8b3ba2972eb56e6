/// miles per meter, as used by the legacy itinerary exports
pub const MILES_PER_METER: f64 = 0.00062137;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// seconds to minutes, rounded to one decimal
pub fn seconds_to_minutes(seconds: f64) -> f64 {
    round_to(seconds / SECONDS_PER_MINUTE, 1)
}

/// meters to miles, rounded to two decimals
pub fn meters_to_miles(meters: f64) -> f64 {
    round_to(meters * MILES_PER_METER, 2)
}

/// rounds to a number of decimal places the way the historical exports did:
/// the exact binary value is rounded in decimal, with exact ties going to the
/// even digit, and the result is the nearest f64 to that decimal.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
