//! Value snapshots of a card status.
//!
//! A [`StatusSnapshot`] captures a status's outcome history and mistake
//! timestamp so a host can store it wherever it likes and rebuild the status
//! later with [`CardStatus::restore`]. The card itself is not part of the
//! snapshot; the host supplies it again on restore.

use crate::core::{CardStatus, Clock, NO_MISTAKE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a [`CardStatus`]'s history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Outcome history, oldest first
    pub results: Vec<bool>,

    /// Milliseconds since the Unix epoch of the latest failure, 0 for none
    pub last_mistake_timestamp: i64,
}

impl StatusSnapshot {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Encode {
            format: "json",
            message: e.to_string(),
        })
    }

    /// Decode from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json).map_err(|e| SnapshotError::Decode {
            format: "json",
            message: e.to_string(),
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::Encode {
            format: "bincode",
            message: e.to_string(),
        })
    }

    /// Decode from bincode and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode {
            format: "bincode",
            message: e.to_string(),
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the version and that the timestamp agrees with the history.
    ///
    /// A snapshot is consistent when it holds a non-zero timestamp exactly
    /// when its history contains a failure.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            warn!(found = self.version, "rejected snapshot version");
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let reason = if self.last_mistake_timestamp < 0 {
            Some(format!(
                "negative mistake timestamp {}",
                self.last_mistake_timestamp
            ))
        } else {
            let failed = self.results.contains(&false);
            let stamped = self.last_mistake_timestamp != NO_MISTAKE;
            match (failed, stamped) {
                (true, false) => Some("failure recorded without a timestamp".to_string()),
                (false, true) => Some("timestamp present without a recorded failure".to_string()),
                _ => None,
            }
        };

        match reason {
            Some(reason) => {
                warn!(id = %self.id, %reason, "rejected snapshot");
                Err(SnapshotError::Inconsistent {
                    id: self.id.clone(),
                    reason,
                })
            }
            None => Ok(()),
        }
    }
}

impl<'a, C, K: Clock> CardStatus<'a, C, K> {
    /// Take a snapshot of the current history. The status is unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cardstatus::core::{CardStatus, ManualClock};
    ///
    /// let card = "hello";
    /// let mut status = CardStatus::with_clock(&card, ManualClock::new(2_000));
    /// status.record_result(false);
    ///
    /// let snapshot = status.snapshot();
    /// let json = snapshot.to_json().unwrap();
    ///
    /// let restored = cardstatus::snapshot::StatusSnapshot::from_json(&json).unwrap();
    /// let status = CardStatus::restore(&card, restored, ManualClock::new(0)).unwrap();
    /// assert_eq!(status.results(), vec![false]);
    /// assert_eq!(status.last_mistake_timestamp(), 2_000);
    /// ```
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            version: SNAPSHOT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            results: self.history().to_vec(),
            last_mistake_timestamp: self.last_mistake_timestamp(),
        }
    }

    /// Rebuild a status for `card` from a snapshot, stamping future failures
    /// with `clock`.
    pub fn restore(
        card: &'a C,
        snapshot: StatusSnapshot,
        clock: K,
    ) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        Ok(Self::from_parts(
            card,
            snapshot.results,
            snapshot.last_mistake_timestamp,
            clock,
        ))
    }
}
