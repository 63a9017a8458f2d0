//! Cardstatus: answer history for a single flashcard
//!
//! A [`CardStatus`] is bound to one flashcard and records whether each
//! attempt to answer it succeeded, together with the time of the most recent
//! failure. It does no scheduling and no storage; callers record an outcome
//! after every attempt and read the history back when they need it.
//!
//! # Core Concepts
//!
//! - **Card status**: Ordered pass/fail history plus the last-mistake time
//! - **Clock**: Pluggable time source used to stamp failures
//! - **Snapshot**: Versioned, serializable copy of a status for hosts that
//!   want to persist it
//!
//! # Example
//!
//! ```rust
//! use cardstatus::core::{CardStatus, ManualClock};
//!
//! struct Flashcard {
//!     term: String,
//! }
//!
//! let card = Flashcard { term: "cześć".to_string() };
//! let clock = ManualClock::new(1_000);
//! let mut status = CardStatus::with_clock(&card, clock.clone());
//!
//! status.record_result(true);
//! status.record_result(false);
//! clock.advance(60_000);
//! status.record_result(true);
//!
//! assert_eq!(status.results(), vec![true, false, true]);
//! assert_eq!(status.last_mistake_timestamp(), 1_000);
//! assert_eq!(status.card().term, "cześć");
//!
//! status.clear_results();
//! assert!(status.results().is_empty());
//! assert_eq!(status.last_mistake_timestamp(), 0);
//! ```

pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use core::{CardStatus, Clock, ManualClock, SystemClock};
pub use snapshot::{SnapshotError, StatusSnapshot};
