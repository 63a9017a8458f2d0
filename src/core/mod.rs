//! Core card status types.
//!
//! This module contains the in-memory side of the crate:
//! - The per-card answer history via [`CardStatus`]
//! - Time sources for stamping mistakes via the [`Clock`] trait
//!
//! Nothing here performs I/O or can fail.

mod clock;
mod status;

pub use clock::{Clock, ManualClock, SystemClock};
pub use status::{CardStatus, EARLIEST_MISTAKE, NO_MISTAKE};
