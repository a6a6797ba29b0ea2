use chrono::NaiveDate;
use serde::Deserialize;

/// Serde mirror of the upstream school-holiday response.
///
/// Every nested field the engine reads is optional so that incomplete
/// upstream records degrade to skipped windows instead of deserialization
/// failures. Structural absence (no content, no vacation collection) is
/// still an error, decided by the normalizer.
#[derive(Debug, Deserialize)]
pub struct SchoolHolidayResponse {
    #[serde(default)]
    pub content: Vec<ContentEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ContentEntry {
    pub vacations: Option<Vec<VacationEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct VacationEntry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub regions: Vec<RegionWindow>,
}

#[derive(Debug, Deserialize)]
pub struct RegionWindow {
    pub region: Option<String>,
    pub startdate: Option<String>,
    pub enddate: Option<String>,
}

/// Parse an upstream date string, tolerating a trailing time component:
/// "2025-10-13" and "2025-10-13T00:00:00.000Z" both parse to the same day.
pub fn parse_upstream_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_upstream_date_accepts_both_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 10, 13).unwrap();
        assert_eq!(parse_upstream_date("2025-10-13"), Some(expected));
        assert_eq!(parse_upstream_date("2025-10-13T00:00:00.000Z"), Some(expected));
    }

    #[test]
    fn test_parse_upstream_date_rejects_garbage() {
        assert_eq!(parse_upstream_date(""), None);
        assert_eq!(parse_upstream_date("13-10-2025"), None);
        assert_eq!(parse_upstream_date("soon"), None);
    }
}
