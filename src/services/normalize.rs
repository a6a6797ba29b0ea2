use crate::errors::{HolidayError, HolidayResult};
use crate::models::{parse_upstream_date, Holiday, Region, SchoolHolidayResponse};
use tracing::debug;

/// Case-insensitive substring marking a window that applies to the whole
/// country regardless of the requested region ("Heel Nederland").
const WHOLE_COUNTRY_MARKER: &str = "heel";

/// Flatten a raw schedule document into holiday records for one region.
///
/// A window is kept when its region equals the requested one exactly, or
/// when its region text contains the whole-country marker. The OR is
/// inclusive: a vacation carrying both a specific-region window and a
/// whole-country window contributes two records, and that duplication is
/// kept as-is. Output order mirrors the document's traversal order; sorting
/// is the selector's job.
///
/// Windows with a missing region, missing or unparseable dates, or an
/// inverted date range are skipped. A document without the expected nested
/// shape is a `MalformedPayload` error, never a silent empty list.
pub fn normalize(raw: &str, region: Region) -> HolidayResult<Vec<Holiday>> {
    let payload: SchoolHolidayResponse = serde_json::from_str(raw)
        .map_err(|e| HolidayError::MalformedPayload(format!("not a schedule document: {}", e)))?;

    let entry = payload
        .content
        .first()
        .ok_or_else(|| HolidayError::MalformedPayload("empty content collection".to_string()))?;

    let vacations = entry
        .vacations
        .as_ref()
        .ok_or_else(|| HolidayError::MalformedPayload("missing vacation collection".to_string()))?;

    let mut holidays = Vec::new();

    for vacation in vacations {
        let kind = vacation.kind.as_deref().unwrap_or("").trim();

        for window in &vacation.regions {
            let window_region = match window.region.as_deref() {
                Some(window_region) => window_region,
                None => continue,
            };

            let matches = window_region == region.as_str()
                || window_region.to_lowercase().contains(WHOLE_COUNTRY_MARKER);
            if !matches {
                continue;
            }

            let start_date = window.startdate.as_deref().and_then(parse_upstream_date);
            let end_date = window.enddate.as_deref().and_then(parse_upstream_date);
            let (start_date, end_date) = match (start_date, end_date) {
                (Some(start_date), Some(end_date)) => (start_date, end_date),
                _ => {
                    debug!("Skipping window with unusable dates for {}", kind);
                    continue;
                }
            };

            if start_date > end_date {
                debug!(
                    "Skipping inverted window {} > {} for {}",
                    start_date, end_date, kind
                );
                continue;
            }

            holidays.push(Holiday::new(kind, start_date, end_date, window_region));
        }
    }

    Ok(holidays)
}
