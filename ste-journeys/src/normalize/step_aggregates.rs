use super::units::{meters_to_miles, seconds_to_minutes};
use crate::directions::Step;

/// walking and transit totals accumulated over the steps of a leg
#[derive(Debug, Clone, PartialEq)]
pub struct StepAggregates {
    pub walk_time_minutes: f64,
    pub walk_dist_miles: f64,
    pub transit_time_minutes: f64,
    pub num_transfers: usize,
    /// departure stop of the first transit step
    pub starting_stop: Option<String>,
    /// arrival stop of the last transit step
    pub end_stop: Option<String>,
    /// one line identifier per transit step, in travel order
    pub routes_taken: Vec<String>,
}

/// accumulates walking time and distance, transit time, the ordered list of
/// transit lines and the first/last transit stops in a single pass.
pub fn extract_step_aggregates(steps: &[Step]) -> StepAggregates {
    let mut walk_seconds: f64 = 0.0;
    let mut walk_meters: f64 = 0.0;
    let mut transit_seconds: f64 = 0.0;
    let mut routes_taken: Vec<String> = vec![];
    let mut starting_stop: Option<String> = None;
    let mut end_stop: Option<String> = None;

    for step in steps {
        match step {
            Step::Walking {
                duration_seconds,
                distance_meters,
            } => {
                walk_seconds += *duration_seconds;
                walk_meters += *distance_meters;
            }
            Step::Transit {
                duration_seconds,
                ride,
                ..
            } => {
                if starting_stop.is_none() {
                    starting_stop = Some(ride.departure_stop.clone());
                }
                end_stop = Some(ride.arrival_stop.clone());
                transit_seconds += *duration_seconds;
                routes_taken.push(ride.line.clone());
            }
            Step::Other { .. } => {}
        }
    }

    StepAggregates {
        walk_time_minutes: seconds_to_minutes(walk_seconds),
        walk_dist_miles: meters_to_miles(walk_meters),
        transit_time_minutes: seconds_to_minutes(transit_seconds),
        num_transfers: routes_taken.len().saturating_sub(1),
        starting_stop,
        end_stop,
        routes_taken,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::TransitRide;

    fn walk(duration_seconds: f64, distance_meters: f64) -> Step {
        Step::Walking {
            duration_seconds,
            distance_meters,
        }
    }

    fn ride(duration_seconds: f64, line: &str, from: &str, to: &str) -> Step {
        Step::Transit {
            duration_seconds,
            distance_meters: 2000.0,
            ride: TransitRide {
                departure_stop: String::from(from),
                arrival_stop: String::from(to),
                line: String::from(line),
            },
        }
    }

    #[test]
    fn test_walk_and_single_ride() {
        let steps = vec![walk(300.0, 400.0), ride(600.0, "5", "Stop A", "Stop B")];
        let result = extract_step_aggregates(&steps);
        assert_eq!(result.walk_time_minutes, 5.0);
        assert_eq!(result.walk_dist_miles, 0.25);
        assert_eq!(result.transit_time_minutes, 10.0);
        assert_eq!(result.num_transfers, 0);
        assert_eq!(result.routes_taken, vec![String::from("5")]);
        assert_eq!(result.starting_stop.as_deref(), Some("Stop A"));
        assert_eq!(result.end_stop.as_deref(), Some("Stop B"));
    }

    #[test]
    fn test_walking_distance_sums_distance_not_duration() {
        // older exports summed walking durations into the distance column;
        // 900 s of walking over 1000 m must report 1000 m worth of miles
        let steps = vec![walk(600.0, 700.0), walk(300.0, 300.0)];
        let result = extract_step_aggregates(&steps);
        assert_eq!(result.walk_dist_miles, meters_to_miles(1000.0));
        assert_eq!(result.walk_dist_miles, 0.62);
        assert_ne!(result.walk_dist_miles, meters_to_miles(900.0));
        assert_eq!(result.walk_time_minutes, 15.0);
    }

    #[test]
    fn test_three_rides_is_two_transfers() {
        let steps = vec![
            walk(120.0, 100.0),
            ride(600.0, "10", "A", "B"),
            walk(60.0, 50.0),
            ride(300.0, "Brio", "B", "C"),
            ride(240.0, "14", "C", "D"),
            walk(180.0, 200.0),
        ];
        let result = extract_step_aggregates(&steps);
        assert_eq!(result.num_transfers, 2);
        assert_eq!(result.routes_taken, vec!["10", "Brio", "14"]);
        assert_eq!(result.starting_stop.as_deref(), Some("A"));
        assert_eq!(result.end_stop.as_deref(), Some("D"));
        assert_eq!(result.transit_time_minutes, 19.0);
        assert_eq!(result.walk_time_minutes, 6.0);
    }

    #[test]
    fn test_no_transit_steps() {
        let steps = vec![walk(900.0, 1200.0)];
        let result = extract_step_aggregates(&steps);
        assert_eq!(result.num_transfers, 0);
        assert_eq!(result.starting_stop, None);
        assert_eq!(result.end_stop, None);
        assert!(result.routes_taken.is_empty());
        assert_eq!(result.transit_time_minutes, 0.0);
    }

    #[test]
    fn test_other_modes_are_not_counted() {
        let steps = vec![Step::Other {
            duration_seconds: 600.0,
            distance_meters: 5000.0,
        }];
        let result = extract_step_aggregates(&steps);
        assert_eq!(result.walk_time_minutes, 0.0);
        assert_eq!(result.walk_dist_miles, 0.0);
        assert_eq!(result.transit_time_minutes, 0.0);
    }
}
