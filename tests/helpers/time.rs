use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vakantieteller::models::Holiday;
use vakantieteller::services::TimeService;

/// Test clock: `today` is pinned and sleeps are recorded instead of awaited.
pub struct ManualTimeService {
    today: NaiveDate,
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualTimeService {
    pub fn new(today: NaiveDate) -> Arc<Self> {
        Arc::new(Self {
            today,
            sleeps: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded_sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl TimeService for ManualTimeService {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn holiday(kind: &str, start: NaiveDate, end: NaiveDate) -> Holiday {
    Holiday::new(kind, start, end, "midden")
}
