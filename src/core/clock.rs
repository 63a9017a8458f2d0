//! Time sources used to stamp recorded mistakes.
//!
//! A [`CardStatus`](super::CardStatus) never reads the system time directly.
//! It asks its [`Clock`] instead, so hosts and tests can decide what "now"
//! means.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of wall-clock time in milliseconds since the Unix epoch.
///
/// # Example
///
/// ```rust
/// use cardstatus::core::{Clock, SystemClock};
///
/// let now = SystemClock.now_millis();
/// assert!(now > 0);
/// ```
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
}

impl<K: Clock + ?Sized> Clock for &K {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same counter, so one handle can be given to a
/// [`CardStatus`](super::CardStatus) while another drives time forward.
///
/// # Example
///
/// ```rust
/// use cardstatus::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// let handle = clock.clone();
///
/// handle.advance(500);
/// assert_eq!(clock.now_millis(), 1_500);
///
/// handle.set(42);
/// assert_eq!(clock.now_millis(), 42);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    /// Create a clock reading `millis`.
    pub fn new(millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(millis)),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Move time forward by `millis`. Saturates instead of wrapping.
    pub fn advance(&self, millis: i64) {
        // The closure never declines, so the update always lands.
        self.millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(millis))
            })
            .ok();
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}
