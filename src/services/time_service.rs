use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

/// Clock port for the engine: retry backoff goes through `sleep` and every
/// "upcoming" decision goes through `today`, so tests can pin the calendar
/// and record delays instead of waiting them out.
#[async_trait]
pub trait TimeService: Send + Sync {
    async fn sleep(&self, duration: Duration);

    fn today(&self) -> NaiveDate;
}

#[derive(Clone)]
pub struct TokioTimeService;

impl TokioTimeService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioTimeService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeService for TokioTimeService {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}
