use crate::errors::{HolidayError, HolidayResult};
use crate::services::time_service::TimeService;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Client identifier sent with every upstream request.
const USER_AGENT: &str = "Vakantieteller/0.1";

/// Retry budget and backoff curve for upstream requests.
///
/// Backoff is linear in the attempt index: attempt 1 waits `base_delay`
/// before attempt 2, attempt 2 waits `2 * base_delay`, and there is no wait
/// after the final attempt.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_delay: Duration,
}

impl RetryPolicy {
    /// Delay to wait after the given 1-based attempt.
    pub fn backoff(&self, attempt: usize) -> Duration {
        self.base_delay * attempt as u32
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

/// HTTP client for the rijksoverheid school-holiday dataset.
pub struct HolidayApiClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
    time: Arc<dyn TimeService>,
}

impl HolidayApiClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        retry: RetryPolicy,
        time: Arc<dyn TimeService>,
    ) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            retry,
            time,
        }
    }

    /// Fetch the raw schedule document for one school year.
    ///
    /// Returns the raw body of the first response with a success status.
    /// Body shape problems are the normalizer's concern and never trigger a
    /// retry; non-success statuses and transport errors do, up to the
    /// policy's attempt budget. Touches nothing but the network.
    pub async fn fetch_school_year(&self, school_year: &str) -> HolidayResult<String> {
        let url = format!("{}/schoolyear/{}?output=json", self.base_url, school_year);
        info!("Fetching school holidays from {}", url);

        let mut last_transport_error: Option<String> = None;

        for attempt in 1..=self.retry.max_attempts {
            match self
                .http
                .get(&url)
                .header("Accept", "application/json")
                .header("User-Agent", USER_AGENT)
                .send()
                .await
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        info!("Attempt {}: received status {}", attempt, status.as_u16());
                        return response.text().await.map_err(|e| {
                            HolidayError::MalformedPayload(format!(
                                "failed to read response body: {}",
                                e
                            ))
                        });
                    }
                    warn!(
                        "Attempt {}/{} returned status {}",
                        attempt,
                        self.retry.max_attempts,
                        status.as_u16()
                    );
                }
                Err(e) => {
                    let message = if e.is_timeout() {
                        format!("request timed out: {}", e)
                    } else if e.is_connect() {
                        format!("connection failed: {}", e)
                    } else {
                        format!("network error: {}", e)
                    };
                    warn!(
                        "Attempt {}/{} failed: {}",
                        attempt, self.retry.max_attempts, message
                    );
                    last_transport_error = Some(message);
                }
            }

            if attempt < self.retry.max_attempts {
                self.time.sleep(self.retry.backoff(attempt)).await;
            }
        }

        Err(HolidayError::Network {
            attempts: self.retry.max_attempts,
            last_error: last_transport_error.unwrap_or_else(|| "request failed".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_is_linear_in_attempt_index() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(1), Duration::from_millis(1000));
        assert_eq!(policy.backoff(2), Duration::from_millis(2000));
    }

    #[test]
    fn test_default_budget() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
    }
}
