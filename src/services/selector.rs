use crate::models::Holiday;
use chrono::NaiveDate;

/// Filter to holidays starting on or after `today`, sorted ascending by
/// start date. The sort is stable, so equal start dates keep their relative
/// input order.
pub fn resolve_upcoming(records: &[Holiday], today: NaiveDate) -> Vec<Holiday> {
    let mut upcoming: Vec<Holiday> = records
        .iter()
        .filter(|holiday| holiday.start_date >= today)
        .cloned()
        .collect();
    upcoming.sort_by_key(|holiday| holiday.start_date);
    upcoming
}

/// The next holiday starting on or after `today`, if any. `None` is the
/// "no upcoming holiday" outcome, not an error.
pub fn resolve_next(records: &[Holiday], today: NaiveDate) -> Option<Holiday> {
    resolve_upcoming(records, today).into_iter().next()
}

/// Whole days from `today` until the holiday starts. Zero or negative once
/// `today` has reached or passed the start date, which only surfaces for
/// explicitly pinned holidays.
pub fn days_until(holiday: &Holiday, today: NaiveDate) -> i64 {
    (holiday.start_date - today).num_days()
}

/// Length of the holiday in days, both boundary days inclusive.
pub fn span_days(holiday: &Holiday) -> i64 {
    (holiday.end_date - holiday.start_date).num_days() + 1
}
