use crate::errors::HolidayResult;
use crate::models::{Countdown, Holiday, QueryContext};
use crate::services::fetch::HolidayApiClient;
use crate::services::normalize::normalize;
use crate::services::selector::{days_until, resolve_next};
use crate::services::time_service::TimeService;
use crate::storage::SelectionStore;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Caller-facing entry points of the retrieval engine.
///
/// Presentation code talks to this service and renders its results; the
/// fetcher, the normalizer and the selection store are internal
/// collaborators it never reaches directly.
pub struct HolidayService {
    client: HolidayApiClient,
    selection: SelectionStore,
    time: Arc<dyn TimeService>,
}

impl HolidayService {
    pub fn new(client: HolidayApiClient, selection: SelectionStore, time: Arc<dyn TimeService>) -> Self {
        Self {
            client,
            selection,
            time,
        }
    }

    /// Fetch and normalize the full holiday list for the given context,
    /// sorted ascending by start date. Past windows are included; filtering
    /// to upcoming ones is the countdown path's concern.
    pub async fn retrieve_holidays(&self, context: &QueryContext) -> HolidayResult<Vec<Holiday>> {
        let raw = self.client.fetch_school_year(&context.school_year).await?;
        let mut holidays = normalize(&raw, context.region)?;
        holidays.sort_by_key(|holiday| holiday.start_date);

        info!(
            "Retrieved {} holidays for region {} / {}",
            holidays.len(),
            context.region,
            context.school_year
        );
        Ok(holidays)
    }

    /// Like `retrieve_holidays`, but degrades any failure to an empty list
    /// after logging it, so presentation callers never handle raw network
    /// errors. The structured error stays obtainable via
    /// `retrieve_holidays` for callers that want it.
    pub async fn retrieve_holidays_or_empty(&self, context: &QueryContext) -> Vec<Holiday> {
        match self.retrieve_holidays(context).await {
            Ok(holidays) => holidays,
            Err(e) => {
                error!("Error fetching holidays: {}", e);
                Vec::new()
            }
        }
    }

    /// Resolve the countdown target and its day count.
    ///
    /// Exactly one of three sources supplies the target, checked in this
    /// order: an explicitly pinned holiday from the caller, an unread
    /// selection handoff (consumed destructively), or the next upcoming
    /// holiday from a fresh retrieval. `Ok(None)` means no upcoming holiday
    /// exists for the current selection, which is a valid outcome.
    pub async fn compute_countdown(
        &self,
        pinned: Option<Holiday>,
        context: &QueryContext,
    ) -> HolidayResult<Option<Countdown>> {
        let today = self.time.today();

        if let Some(holiday) = pinned {
            info!("Using pinned holiday {} for countdown", holiday.kind);
            return Ok(Some(Countdown {
                days_left: days_until(&holiday, today),
                holiday,
            }));
        }

        match self.selection.read_and_clear().await {
            Ok(Some(holiday)) => {
                info!("Using selected holiday {} from storage", holiday.kind);
                return Ok(Some(Countdown {
                    days_left: days_until(&holiday, today),
                    holiday,
                }));
            }
            Ok(None) => {}
            Err(e) => {
                // Advisory state only; fall through to a fresh retrieval.
                warn!("Error reading selected holiday from storage: {}", e);
            }
        }

        let holidays = self.retrieve_holidays(context).await?;
        Ok(resolve_next(&holidays, today).map(|holiday| Countdown {
            days_left: days_until(&holiday, today),
            holiday,
        }))
    }
}
