//! Answer history for a single flashcard.
//!
//! A [`CardStatus`] borrows the card it tracks and owns two pieces of state:
//! the chronological list of pass/fail outcomes, and the time of the most
//! recent failure.

use super::clock::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Sentinel stored as the mistake timestamp when no failure is recorded.
pub const NO_MISTAKE: i64 = 0;

/// Earliest time a failure can be stamped with. Clocks reading at or before
/// the epoch are clamped here so a recorded failure never looks like
/// [`NO_MISTAKE`].
pub const EARLIEST_MISTAKE: i64 = NO_MISTAKE + 1;

/// Pass/fail history and last-mistake time for one flashcard.
///
/// The card is borrowed and never inspected; any type works. Failures are
/// stamped with the status's [`Clock`], which defaults to [`SystemClock`].
///
/// # Example
///
/// ```rust
/// use cardstatus::CardStatus;
///
/// struct Card {
///     front: &'static str,
///     back: &'static str,
/// }
///
/// let card = Card { front: "cześć", back: "hello" };
/// let mut status = CardStatus::new(&card);
///
/// status.record_result(true);
/// status.record_result(false);
///
/// assert_eq!(status.results(), vec![true, false]);
/// assert!(status.last_mistake_timestamp() > 0);
/// assert_eq!(status.card().front, "cześć");
///
/// status.clear_results();
/// assert!(status.results().is_empty());
/// assert_eq!(status.last_mistake_timestamp(), 0);
/// ```
#[derive(Debug)]
pub struct CardStatus<'a, C, K = SystemClock> {
    card: &'a C,
    results: Vec<bool>,
    last_mistake_timestamp: i64,
    clock: K,
}

// Derived Clone would demand `C: Clone`, but only the reference is copied.
impl<C, K: Clone> Clone for CardStatus<'_, C, K> {
    fn clone(&self) -> Self {
        Self {
            card: self.card,
            results: self.results.clone(),
            last_mistake_timestamp: self.last_mistake_timestamp,
            clock: self.clock.clone(),
        }
    }
}

impl<'a, C> CardStatus<'a, C> {
    /// Start tracking `card` with an empty history, stamping failures with
    /// the system clock.
    pub fn new(card: &'a C) -> Self {
        Self::with_clock(card, SystemClock)
    }
}

impl<'a, C, K: Clock> CardStatus<'a, C, K> {
    /// Start tracking `card` with an empty history, stamping failures with
    /// `clock`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cardstatus::core::{CardStatus, ManualClock};
    ///
    /// let card = "dziękuję";
    /// let clock = ManualClock::new(1_000);
    /// let mut status = CardStatus::with_clock(&card, clock.clone());
    ///
    /// status.record_result(false);
    /// assert_eq!(status.last_mistake_timestamp(), 1_000);
    /// ```
    pub fn with_clock(card: &'a C, clock: K) -> Self {
        Self::from_parts(card, Vec::new(), NO_MISTAKE, clock)
    }

    pub(crate) fn from_parts(
        card: &'a C,
        results: Vec<bool>,
        last_mistake_timestamp: i64,
        clock: K,
    ) -> Self {
        Self {
            card,
            results,
            last_mistake_timestamp,
            clock,
        }
    }

    /// The card this status tracks.
    pub fn card(&self) -> &'a C {
        self.card
    }

    /// Copy of the outcome history, oldest first.
    ///
    /// The returned vector is owned by the caller; changing it has no effect
    /// on the status.
    pub fn results(&self) -> Vec<bool> {
        self.results.clone()
    }

    /// Milliseconds since the Unix epoch of the latest failure, or
    /// [`NO_MISTAKE`] if none has been recorded since creation or the last
    /// clear.
    pub fn last_mistake_timestamp(&self) -> i64 {
        self.last_mistake_timestamp
    }

    /// Append an outcome.
    ///
    /// A failure moves the mistake timestamp to the clock's current time,
    /// clamped to [`EARLIEST_MISTAKE`]. A success leaves it alone: the
    /// timestamp always names the latest failure, however many successes
    /// follow it.
    pub fn record_result(&mut self, success: bool) {
        self.results.push(success);

        if success {
            trace!(attempts = self.results.len(), "recorded success");
        } else {
            self.last_mistake_timestamp = self.clock.now_millis().max(EARLIEST_MISTAKE);
            debug!(
                attempts = self.results.len(),
                timestamp = self.last_mistake_timestamp,
                "recorded mistake"
            );
        }
    }

    /// Forget every outcome and the mistake timestamp.
    pub fn clear_results(&mut self) {
        debug!(discarded = self.results.len(), "cleared results");
        self.results.clear();
        self.last_mistake_timestamp = NO_MISTAKE;
    }

    /// The mistake timestamp as a UTC time, `None` when no failure is
    /// recorded.
    pub fn last_mistake(&self) -> Option<DateTime<Utc>> {
        if self.has_mistakes() {
            DateTime::from_timestamp_millis(self.last_mistake_timestamp)
        } else {
            None
        }
    }

    /// Whether a failure has been recorded since creation or the last clear.
    pub fn has_mistakes(&self) -> bool {
        self.last_mistake_timestamp != NO_MISTAKE
    }

    /// Number of recorded outcomes.
    pub fn attempts(&self) -> usize {
        self.results.len()
    }

    /// Number of recorded successes.
    pub fn successes(&self) -> usize {
        self.results.iter().filter(|&&success| success).count()
    }

    /// Number of recorded failures.
    pub fn mistakes(&self) -> usize {
        self.attempts() - self.successes()
    }

    /// The most recent outcome.
    pub fn last_result(&self) -> Option<bool> {
        self.results.last().copied()
    }

    /// Fraction of attempts answered correctly, `None` before the first
    /// attempt.
    pub fn success_rate(&self) -> Option<f64> {
        match self.attempts() {
            0 => None,
            attempts => Some(self.successes() as f64 / attempts as f64),
        }
    }

    pub(crate) fn history(&self) -> &[bool] {
        &self.results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;

    #[derive(Debug, PartialEq)]
    struct TestCard {
        term: String,
        definition: String,
    }

    fn card() -> TestCard {
        TestCard {
            term: "proszę".to_string(),
            definition: "please".to_string(),
        }
    }

    #[test]
    fn new_status_is_empty() {
        let card = card();
        let status = CardStatus::new(&card);

        assert!(status.results().is_empty());
        assert_eq!(status.last_mistake_timestamp(), NO_MISTAKE);
        assert!(!status.has_mistakes());
        assert!(status.last_mistake().is_none());
        assert_eq!(status.last_result(), None);
        assert_eq!(status.success_rate(), None);
    }

    #[test]
    fn card_is_the_one_given() {
        let card = card();
        let mut status = CardStatus::new(&card);

        assert!(std::ptr::eq(status.card(), &card));
        status.record_result(false);
        status.clear_results();
        assert!(std::ptr::eq(status.card(), &card));
        assert_eq!(status.card().term, "proszę");
        assert_eq!(status.card().definition, "please");
    }

    #[test]
    fn results_are_kept_in_order() {
        let card = card();
        let mut status = CardStatus::with_clock(&card, ManualClock::new(1));

        for outcome in [true, true, false, true, false] {
            status.record_result(outcome);
        }

        assert_eq!(status.results(), vec![true, true, false, true, false]);
        assert_eq!(status.attempts(), 5);
        assert_eq!(status.successes(), 3);
        assert_eq!(status.mistakes(), 2);
        assert_eq!(status.last_result(), Some(false));
    }

    #[test]
    fn results_returns_a_copy() {
        let card = card();
        let mut status = CardStatus::new(&card);
        status.record_result(true);

        let mut copy = status.results();
        copy.push(false);
        copy[0] = false;

        assert_eq!(status.results(), vec![true]);
    }

    #[test]
    fn mistake_uses_clock_time() {
        let card = card();
        let clock = ManualClock::new(5_000);
        let mut status = CardStatus::with_clock(&card, clock.clone());

        status.record_result(false);
        assert_eq!(status.last_mistake_timestamp(), 5_000);

        clock.advance(250);
        status.record_result(false);
        assert_eq!(status.last_mistake_timestamp(), 5_250);
    }

    #[test]
    fn success_does_not_touch_timestamp() {
        let card = card();
        let clock = ManualClock::new(10);
        let mut status = CardStatus::with_clock(&card, clock.clone());

        status.record_result(true);
        assert_eq!(status.last_mistake_timestamp(), NO_MISTAKE);

        status.record_result(false);
        clock.advance(1_000);
        status.record_result(true);
        status.record_result(true);

        assert_eq!(status.last_mistake_timestamp(), 10);
    }

    #[test]
    fn clear_resets_everything() {
        let card = card();
        let mut status = CardStatus::with_clock(&card, ManualClock::new(99));

        status.record_result(false);
        status.record_result(true);
        status.clear_results();

        assert!(status.results().is_empty());
        assert_eq!(status.last_mistake_timestamp(), NO_MISTAKE);
        assert_eq!(status.attempts(), 0);

        status.record_result(true);
        assert_eq!(status.results(), vec![true]);
        assert_eq!(status.last_mistake_timestamp(), NO_MISTAKE);
    }

    #[test]
    fn last_mistake_converts_to_utc() {
        let card = card();
        let mut status = CardStatus::with_clock(&card, ManualClock::new(1_700_000_000_123));

        status.record_result(false);

        let when = status.last_mistake().unwrap();
        assert_eq!(when.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn system_clock_stamps_real_time() {
        let card = card();
        let mut status = CardStatus::new(&card);

        let before = Utc::now().timestamp_millis();
        status.record_result(false);
        let after = Utc::now().timestamp_millis();

        assert!(status.last_mistake_timestamp() >= before);
        assert!(status.last_mistake_timestamp() <= after);
    }

    #[test]
    fn success_rate_counts_successes() {
        let card = card();
        let mut status = CardStatus::with_clock(&card, ManualClock::new(1));

        status.record_result(true);
        status.record_result(false);
        status.record_result(true);
        status.record_result(true);

        assert_eq!(status.success_rate(), Some(0.75));
    }

    #[test]
    fn mistake_at_epoch_still_counts() {
        let card = card();
        let mut status = CardStatus::with_clock(&card, ManualClock::default());

        status.record_result(false);

        assert_eq!(status.results(), vec![false]);
        assert_eq!(status.last_mistake_timestamp(), EARLIEST_MISTAKE);
        assert!(status.has_mistakes());

        let json = status.snapshot().to_json().unwrap();
        let snapshot = crate::snapshot::StatusSnapshot::from_json(&json).unwrap();
        let restored = CardStatus::restore(&card, snapshot, ManualClock::default()).unwrap();
        assert_eq!(restored.results(), vec![false]);
        assert_eq!(restored.last_mistake_timestamp(), EARLIEST_MISTAKE);
    }

    #[test]
    fn mistake_before_epoch_is_clamped() {
        let card = card();
        let clock = ManualClock::new(-5);
        let mut status = CardStatus::with_clock(&card, clock.clone());

        status.record_result(false);
        assert_eq!(status.last_mistake_timestamp(), EARLIEST_MISTAKE);
        assert!(CardStatus::restore(&card, status.snapshot(), clock.clone()).is_ok());

        clock.set(250);
        status.record_result(false);
        assert_eq!(status.last_mistake_timestamp(), 250);
    }

    #[test]
    fn status_is_cloneable() {
        let card = card();
        let mut status = CardStatus::with_clock(&card, ManualClock::new(4));
        status.record_result(false);

        let mut cloned = status.clone();
        cloned.record_result(true);

        assert_eq!(status.results(), vec![false]);
        assert_eq!(cloned.results(), vec![false, true]);
        assert_eq!(cloned.last_mistake_timestamp(), 4);
    }
}
