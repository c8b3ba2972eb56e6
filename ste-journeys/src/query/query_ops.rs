use super::{DirectionsClient, DirectionsRequest, OdRecord, QueryError};
use crate::{config::DirectionsSettings, normalize::ExpectedPeriod};
use kdam::tqdm;
use serde_json::{json, Value};

/// queries every OD record in order and returns the raw responses, one per
/// record. responses the API could not route get the requested origin and
/// destination written into their geocoded waypoints.
///
/// the first record that cannot be queried stops the batch with
/// [`QueryError::BatchInterrupted`], which carries the responses collected
/// so far.
pub fn query_batch(
    client: &DirectionsClient,
    records: &[OdRecord],
    period: ExpectedPeriod,
    settings: &DirectionsSettings,
) -> Result<Vec<Value>, QueryError> {
    let mut responses = Vec::with_capacity(records.len());
    let iter = tqdm!(
        records.iter().enumerate(),
        total = records.len(),
        desc = format!("{period} directions")
    );
    for (index, record) in iter {
        let fetched = DirectionsRequest::for_period(record, index, period, settings)
            .and_then(|request| client.fetch(&request).map(|response| (request, response)));
        let (request, mut response) = match fetched {
            Ok(fetched) => fetched,
            Err(source) => {
                return Err(QueryError::BatchInterrupted {
                    index,
                    completed: responses,
                    source: Box::new(source),
                })
            }
        };
        let status = response
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        if status != "OK" {
            log::debug!("OD record {index} returned status {status}");
            annotate_unrouted_waypoints(&mut response, &request.origin, &request.destination)?;
        }
        responses.push(response);
    }
    Ok(responses)
}

/// writes the requested origin and destination into the `address` of the
/// first two geocoded waypoints, creating them when the API returned fewer.
pub fn annotate_unrouted_waypoints(
    response: &mut Value,
    origin: &str,
    destination: &str,
) -> Result<(), QueryError> {
    let object = response.as_object_mut().ok_or_else(|| {
        QueryError::InvalidResponse(format!("response for {origin} -> {destination}"))
    })?;
    let waypoints = object
        .entry("geocoded_waypoints")
        .or_insert_with(|| json!([]));
    if !waypoints.is_array() {
        *waypoints = json!([]);
    }
    if let Some(list) = waypoints.as_array_mut() {
        while list.len() < 2 {
            list.push(json!({}));
        }
        for (waypoint, address) in list.iter_mut().zip([origin, destination]) {
            if waypoint.is_object() {
                waypoint["address"] = json!(address);
            } else {
                *waypoint = json!({"address": address});
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::stub_server::StubServer;

    #[test]
    fn test_annotate_existing_waypoints() {
        let mut response = json!({
            "status": "ZERO_RESULTS",
            "routes": [],
            "geocoded_waypoints": [
                {"geocoder_status": "OK", "place_id": "abc"},
                {"geocoder_status": "OK", "place_id": "def"}
            ]
        });
        annotate_unrouted_waypoints(&mut response, "123 Main St", "31.76,-106.48")
            .expect("annotates");
        assert_eq!(response["geocoded_waypoints"][0]["address"], json!("123 Main St"));
        assert_eq!(response["geocoded_waypoints"][0]["place_id"], json!("abc"));
        assert_eq!(response["geocoded_waypoints"][1]["address"], json!("31.76,-106.48"));
    }

    #[test]
    fn test_annotate_missing_waypoints() {
        let mut response = json!({"status": "NOT_FOUND", "routes": []});
        annotate_unrouted_waypoints(&mut response, "A", "B").expect("annotates");
        assert_eq!(
            response["geocoded_waypoints"],
            json!([{"address": "A"}, {"address": "B"}])
        );
    }

    #[test]
    fn test_annotated_response_normalizes_as_unrouted() {
        let mut response = json!({"status": "ZERO_RESULTS", "routes": []});
        annotate_unrouted_waypoints(&mut response, "A", "B").expect("annotates");
        let result = crate::directions::DirectionsResult::from_json(response).expect("parses");
        let (record, _) = crate::normalize::build_record(&result).expect("builds");
        assert_eq!(record.origin(), Some("A"));
        assert_eq!(record.dest(), Some("B"));
        assert_eq!(record.notes, "ZERO_RESULTS");
    }

    fn stub_client(base_url: String) -> (DirectionsClient, DirectionsSettings) {
        let settings = DirectionsSettings {
            base_url,
            request_delay_ms: 0,
            retry_delay_ms: 0,
            max_attempts: 1,
            ..Default::default()
        };
        let http = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .expect("http client builds");
        let client = DirectionsClient::with_http_client(&settings, String::from("test-key"), http);
        (client, settings)
    }

    fn od_record(home_address: &str, am_arrival_timestamp: Option<i64>) -> OdRecord {
        OdRecord {
            home_address: String::from(home_address),
            school_lat: 31.76,
            school_lon: -106.48,
            am_arrival_timestamp,
            pm_departure_timestamp: None,
        }
    }

    #[test]
    fn test_query_batch_annotates_unrouted_responses() {
        let routed = json!({"status": "OK", "routes": [], "geocoded_waypoints": []});
        let server = StubServer::start(vec![
            (200, routed.to_string()),
            (200, json!({"status": "ZERO_RESULTS", "routes": []}).to_string()),
        ]);
        let (client, settings) = stub_client(server.base_url());
        let records = vec![
            od_record("1 Home Ave", Some(1568815200)),
            od_record("2 Home Ave", Some(1568815200)),
        ];
        let responses = query_batch(&client, &records, ExpectedPeriod::Am, &settings)
            .expect("batch succeeds");
        assert_eq!(server.finish().len(), 2);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0], routed);
        assert_eq!(
            responses[1]["geocoded_waypoints"],
            json!([{"address": "2 Home Ave"}, {"address": "31.76,-106.48"}])
        );
    }

    #[test]
    fn test_query_batch_keeps_completed_responses_on_failure() {
        let server = StubServer::start(vec![(
            200,
            json!({"status": "NOT_FOUND", "routes": []}).to_string(),
        )]);
        let (client, settings) = stub_client(server.base_url());
        let records = vec![od_record("1 Home Ave", Some(1568815200)), od_record("2 Home Ave", None)];
        let result = query_batch(&client, &records, ExpectedPeriod::Am, &settings);
        assert_eq!(server.finish().len(), 1);
        match result {
            Err(QueryError::BatchInterrupted {
                index,
                completed,
                source,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(completed.len(), 1);
                assert_eq!(completed[0]["geocoded_waypoints"][0]["address"], json!("1 Home Ave"));
                assert!(matches!(*source, QueryError::MissingTimestamp { index: 1, .. }));
            }
            other => panic!("expected interrupted batch, found {other:?}"),
        }
    }

    #[test]
    fn test_non_object_response_is_rejected() {
        let mut response = json!(["not", "an", "object"]);
        let result = annotate_unrouted_waypoints(&mut response, "A", "B");
        assert!(matches!(result, Err(QueryError::InvalidResponse(_))));
    }
}
