use crate::errors::{HolidayError, HolidayResult};
use crate::models::QueryContext;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

const REGION_FILE: &str = "region";
const SCHOOL_YEAR_FILE: &str = "school_year";

/// Persisted region and school-year selection, one small file per key.
///
/// The engine never reads these itself; the presentation layer loads a
/// `QueryContext` here once and passes it into every call. Reads never
/// fail: missing or invalid values fall back to the defaults so a fresh
/// install starts with a usable context.
#[derive(Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Load the query context, substituting defaults for anything missing.
    pub async fn load(&self) -> QueryContext {
        let mut context = QueryContext::default();

        if let Ok(raw) = fs::read_to_string(self.dir.join(REGION_FILE)).await {
            match raw.trim().parse() {
                Ok(region) => context.region = region,
                Err(e) => warn!("Ignoring stored region: {}", e),
            }
        }

        if let Ok(raw) = fs::read_to_string(self.dir.join(SCHOOL_YEAR_FILE)).await {
            let school_year = raw.trim();
            if !school_year.is_empty() {
                context.school_year = school_year.to_string();
            }
        }

        context
    }

    /// Persist both settings.
    pub async fn save(&self, context: &QueryContext) -> HolidayResult<()> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            HolidayError::Storage(format!("failed to create data directory: {}", e))
        })?;

        fs::write(self.dir.join(REGION_FILE), context.region.as_str())
            .await
            .map_err(|e| HolidayError::Storage(format!("failed to write region: {}", e)))?;

        fs::write(self.dir.join(SCHOOL_YEAR_FILE), context.school_year.as_bytes())
            .await
            .map_err(|e| HolidayError::Storage(format!("failed to write school year: {}", e)))
    }
}
