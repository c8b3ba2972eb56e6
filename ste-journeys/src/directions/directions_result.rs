use super::{
    response::{DirectionsResponse, GeocodedWaypoint},
    DirectionsError, Leg,
};

/// a single origin-destination query result.
///
/// a response with at least one route is [`DirectionsResult::Routed`]; only the
/// first leg of the first route is kept. anything else is
/// [`DirectionsResult::Unrouted`], which is an expected outcome and not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectionsResult {
    Routed(RoutedResult),
    Unrouted(UnroutedResult),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutedResult {
    pub overview_polyline: String,
    pub leg: Leg,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnroutedResult {
    pub status: String,
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl DirectionsResult {
    pub fn from_json(value: serde_json::Value) -> Result<DirectionsResult, DirectionsError> {
        let response: DirectionsResponse = serde_json::from_value(value)?;
        DirectionsResult::try_from(response)
    }
}

impl TryFrom<DirectionsResponse> for DirectionsResult {
    type Error = DirectionsError;

    fn try_from(response: DirectionsResponse) -> Result<Self, Self::Error> {
        let DirectionsResponse {
            status,
            routes,
            geocoded_waypoints,
        } = response;
        let n_routes = routes.len();
        match routes.into_iter().next() {
            Some(route) => {
                let n_legs = route.legs.len();
                if n_routes > 1 || n_legs > 1 {
                    log::debug!(
                        "ignoring {} extra route(s) and {} extra leg(s)",
                        n_routes - 1,
                        n_legs.saturating_sub(1)
                    );
                }
                let leg = route
                    .legs
                    .into_iter()
                    .next()
                    .ok_or(DirectionsError::MissingLeg)?;
                Ok(DirectionsResult::Routed(RoutedResult {
                    overview_polyline: route.overview_polyline.points,
                    leg: Leg::try_from(leg)?,
                }))
            }
            None => {
                let found = geocoded_waypoints.len();
                let mut waypoints = geocoded_waypoints.into_iter();
                match (waypoints.next(), waypoints.next()) {
                    (Some(origin), Some(destination)) => {
                        Ok(DirectionsResult::Unrouted(UnroutedResult {
                            status,
                            origin: waypoint_address(origin),
                            destination: waypoint_address(destination),
                        }))
                    }
                    _ => Err(DirectionsError::MissingWaypoints { status, found }),
                }
            }
        }
    }
}

fn waypoint_address(waypoint: GeocodedWaypoint) -> Option<String> {
    waypoint.address
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::Step;
    use serde_json::json;

    #[test]
    fn test_routed_keeps_first_leg_of_first_route() {
        let input = json!({
            "status": "OK",
            "geocoded_waypoints": [{"geocoder_status": "OK"}, {"geocoder_status": "OK"}],
            "routes": [
                {
                    "overview_polyline": {"points": "_p~iF~ps|U"},
                    "legs": [
                        {
                            "start_address": "100 Home St",
                            "end_address": "Bowie High School",
                            "start_location": {"lat": 31.75, "lng": -106.45},
                            "end_location": {"lat": 31.76, "lng": -106.46},
                            "departure_time": {"text": "7:02am", "time_zone": "America/Denver", "value": 1568811720},
                            "arrival_time": {"text": "7:40am", "time_zone": "America/Denver", "value": 1568814000},
                            "duration": {"text": "38 mins", "value": 2280},
                            "distance": {"text": "4.1 mi", "value": 6598},
                            "steps": [
                                {"travel_mode": "WALKING", "duration": {"value": 120}, "distance": {"value": 150}}
                            ]
                        },
                        {
                            "start_address": "ignored",
                            "end_address": "ignored",
                            "start_location": {"lat": 0.0, "lng": 0.0},
                            "end_location": {"lat": 0.0, "lng": 0.0},
                            "duration": {"value": 1},
                            "distance": {"value": 1}
                        }
                    ]
                },
                {"overview_polyline": {"points": ""}, "legs": []}
            ]
        });
        let result = DirectionsResult::from_json(input).expect("valid response");
        let routed = match result {
            DirectionsResult::Routed(r) => r,
            other => panic!("expected routed result, found {other:?}"),
        };
        assert_eq!(routed.overview_polyline, "_p~iF~ps|U");
        assert_eq!(routed.leg.start_address, "100 Home St");
        assert_eq!(routed.leg.start_location.x, -106.45);
        assert_eq!(routed.leg.start_location.y, 31.75);
        assert_eq!(routed.leg.departure_time.as_deref(), Some("7:02am"));
        assert_eq!(
            routed.leg.steps,
            vec![Step::Walking {
                duration_seconds: 120.0,
                distance_meters: 150.0
            }]
        );
    }

    #[test]
    fn test_route_without_legs_is_rejected() {
        let input = json!({
            "status": "OK",
            "routes": [{"overview_polyline": {"points": ""}, "legs": []}]
        });
        let result = DirectionsResult::from_json(input);
        assert!(matches!(result, Err(DirectionsError::MissingLeg)));
    }

    #[test]
    fn test_no_routes_is_unrouted() {
        let input = json!({
            "status": "ZERO_RESULTS",
            "routes": [],
            "geocoded_waypoints": [{"address": "A"}, {"address": "B"}]
        });
        let result = DirectionsResult::from_json(input).expect("valid response");
        assert_eq!(
            result,
            DirectionsResult::Unrouted(UnroutedResult {
                status: String::from("ZERO_RESULTS"),
                origin: Some(String::from("A")),
                destination: Some(String::from("B")),
            })
        );
    }

    #[test]
    fn test_unrouted_requires_two_waypoints() {
        let input = json!({
            "status": "NOT_FOUND",
            "geocoded_waypoints": [{"address": "A"}]
        });
        let result = DirectionsResult::from_json(input);
        assert!(matches!(
            result,
            Err(DirectionsError::MissingWaypoints { found: 1, .. })
        ));
    }
}
