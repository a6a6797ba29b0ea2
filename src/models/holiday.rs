use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One concrete holiday window for one resolved region.
///
/// `kind` is the upstream season label ("Herfstvakantie", "Kerstvakantie",
/// ...), trimmed of surrounding whitespace; it is empty when upstream omits
/// it. Dates are day-granular and `start_date <= end_date` holds for every
/// constructed record. The serialized field names match the upstream wire
/// form so a persisted selection round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "startdate")]
    pub start_date: NaiveDate,
    #[serde(rename = "enddate")]
    pub end_date: NaiveDate,
    pub region: String,
}

impl Holiday {
    pub fn new(
        kind: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        region: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            start_date,
            end_date,
            region: region.into(),
        }
    }
}

/// Countdown target handed to presentation code.
///
/// `days_left` can be zero or negative when the holiday was pinned
/// explicitly and its start date has already passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub holiday: Holiday,
    pub days_left: i64,
}
