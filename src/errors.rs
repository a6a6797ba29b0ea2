use thiserror::Error;

/// Failures surfaced by the holiday retrieval pipeline.
///
/// "No upcoming holiday" is not represented here; it is a valid outcome and
/// callers receive it as an empty list or `None`.
#[derive(Debug, Error)]
pub enum HolidayError {
    /// Every attempt was exhausted without a success status. Carries the
    /// last transport error, or a generic message when all attempts came
    /// back as non-success statuses without throwing.
    #[error("request failed after {attempts} attempts: {last_error}")]
    Network { attempts: usize, last_error: String },

    /// The response body lacked the expected vacation/region structure.
    #[error("unexpected response shape: {0}")]
    MalformedPayload(String),

    /// Reading or writing the persisted selection/settings failed.
    #[error("storage error: {0}")]
    Storage(String),
}

pub type HolidayResult<T> = Result<T, HolidayError>;
