use super::{DirectionsRequest, QueryError};
use crate::config::DirectionsSettings;
use reqwest::{blocking::Client, StatusCode};
use std::{thread, time::Duration};

/// blocking Directions API client. every call is followed by a fixed pause,
/// and failed calls are retried after a fixed delay, without backoff.
pub struct DirectionsClient {
    http: Client,
    base_url: String,
    api_key: String,
    request_delay: Duration,
    retry_delay: Duration,
    max_attempts: u32,
}

impl DirectionsClient {
    pub fn new(settings: &DirectionsSettings, api_key: String) -> Result<Self, QueryError> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self::with_http_client(settings, api_key, http))
    }

    /// builds a client around an already configured [`Client`]
    pub fn with_http_client(settings: &DirectionsSettings, api_key: String, http: Client) -> Self {
        Self {
            http,
            base_url: settings.base_url.clone(),
            api_key,
            request_delay: Duration::from_millis(settings.request_delay_ms),
            retry_delay: Duration::from_millis(settings.retry_delay_ms),
            max_attempts: settings.max_attempts.max(1),
        }
    }

    /// sends the request and returns the raw response body
    pub fn fetch(&self, request: &DirectionsRequest) -> Result<serde_json::Value, QueryError> {
        let mut params = request.query_pairs();
        params.push(("key", self.api_key.clone()));
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let outcome = self.http.get(&self.base_url).query(&params).send();
            thread::sleep(self.request_delay);
            match outcome {
                Ok(response) if response.status() == StatusCode::OK => {
                    return Ok(response.json::<serde_json::Value>()?);
                }
                Ok(response) => {
                    let status = response.status().as_u16();
                    if attempt >= self.max_attempts {
                        return Err(QueryError::UnexpectedStatus {
                            status,
                            attempts: attempt,
                        });
                    }
                    log::warn!(
                        "directions request returned HTTP {status}, attempt {attempt} of {}",
                        self.max_attempts
                    );
                }
                Err(e) => {
                    if attempt >= self.max_attempts {
                        return Err(QueryError::from(e));
                    }
                    log::warn!(
                        "directions request failed: {e}, attempt {attempt} of {}",
                        self.max_attempts
                    );
                }
            }
            thread::sleep(self.retry_delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{stub_server::StubServer, RequestTime};
    use serde_json::json;

    fn request() -> DirectionsRequest {
        DirectionsRequest {
            origin: String::from("123 Main St"),
            destination: String::from("31.76,-106.48"),
            mode: String::from("transit"),
            units: String::from("imperial"),
            time: RequestTime::ArriveBy(1568815200),
        }
    }

    fn client(base_url: String, max_attempts: u32) -> DirectionsClient {
        let settings = DirectionsSettings {
            base_url,
            request_delay_ms: 0,
            retry_delay_ms: 0,
            max_attempts,
            ..Default::default()
        };
        let http = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("http client builds");
        DirectionsClient::with_http_client(&settings, String::from("test-key"), http)
    }

    #[test]
    fn test_retries_after_server_error() {
        let server = StubServer::start(vec![
            (500, String::from("{}")),
            (200, json!({"status": "OK", "routes": []}).to_string()),
        ]);
        let result = client(server.base_url(), 3)
            .fetch(&request())
            .expect("second attempt succeeds");
        assert_eq!(result, json!({"status": "OK", "routes": []}));

        let requests = server.finish();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].contains("key=test-key"), "{}", requests[0]);
        assert!(requests[0].contains("arrival_time=1568815200"), "{}", requests[0]);
        assert!(requests[0].contains("mode=transit"), "{}", requests[0]);
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let server = StubServer::start(vec![
            (500, String::from("{}")),
            (503, String::from("{}")),
            (500, String::from("{}")),
        ]);
        let result = client(server.base_url(), 3).fetch(&request());
        assert!(matches!(
            result,
            Err(QueryError::UnexpectedStatus {
                status: 500,
                attempts: 3
            })
        ));
        assert_eq!(server.finish().len(), 3);
    }

    #[test]
    fn test_transport_failure_is_retried_then_returned() {
        let base_url = StubServer::closed_base_url();
        let result = client(base_url, 2).fetch(&request());
        assert!(matches!(result, Err(QueryError::HttpError { .. })));
    }
}
