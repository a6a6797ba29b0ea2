use crate::errors::{HolidayError, HolidayResult};
use crate::models::Holiday;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

/// File name of the single handoff slot, keyed apart from the settings.
const SLOT_FILE: &str = "selected_holiday.json";

/// Single-slot persisted mailbox carrying one explicitly chosen holiday
/// from the overview flow to the countdown flow.
///
/// `write` overwrites unconditionally (last write wins, no queuing, no
/// history) and `read_and_clear` is destructive, so a given selection
/// reaches at most one countdown computation. There is no locking: the slot
/// is advisory UI state with one producer and one consumer in normal
/// operation, and racing writers resolve by plain overwrite. The slot file
/// survives process restarts.
#[derive(Clone)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SLOT_FILE),
        }
    }

    /// Persist `holiday` as the current selection, replacing any unread one.
    pub async fn write(&self, holiday: &Holiday) -> HolidayResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                HolidayError::Storage(format!("failed to create data directory: {}", e))
            })?;
        }

        let json = serde_json::to_vec(holiday)
            .map_err(|e| HolidayError::Storage(format!("failed to serialize selection: {}", e)))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| HolidayError::Storage(format!("failed to write selection: {}", e)))
    }

    /// Take the current selection out of the slot, leaving it empty. A
    /// second call without an intervening `write` returns `None`.
    ///
    /// A slot that no longer parses is cleared and reported as empty rather
    /// than failing the countdown that consumed it.
    pub async fn read_and_clear(&self) -> HolidayResult<Option<Holiday>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(HolidayError::Storage(format!(
                    "failed to read selection: {}",
                    e
                )))
            }
        };

        fs::remove_file(&self.path)
            .await
            .map_err(|e| HolidayError::Storage(format!("failed to clear selection: {}", e)))?;

        match serde_json::from_slice(&bytes) {
            Ok(holiday) => Ok(Some(holiday)),
            Err(e) => {
                warn!("Discarding unreadable selection slot: {}", e);
                Ok(None)
            }
        }
    }
}
