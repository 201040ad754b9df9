//! Sliding-window admission counter

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Window length for admission counting
const WINDOW: Duration = Duration::from_secs(60);

/// Outcome of an admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admission {
    /// Whether the call may proceed
    pub permitted: bool,

    /// Slots left in the current window (0 on rejection)
    pub remaining: usize,
}

/// A fixed-capacity, time-windowed admission counter.
///
/// Counts admissions over the trailing 60 seconds and rejects once the
/// capacity is reached. The whole purge-check-append sequence runs under one
/// lock, so two callers racing at the capacity boundary can never both take
/// the last slot.
///
/// The limiter is an explicit object: construct it once at the composition
/// root (capacity typically from [`AdmissionConfig`](crate::AdmissionConfig))
/// and hand out references. It holds no error states - `allow()` always
/// returns an answer.
#[derive(Debug)]
pub struct SlidingWindowLimiter {
    capacity: usize,
    window: Duration,
    admitted: Mutex<VecDeque<Instant>>,
}

impl SlidingWindowLimiter {
    /// Create a limiter with the standard 60-second window
    pub fn new(capacity: usize) -> Self {
        Self::with_window(capacity, WINDOW)
    }

    /// Create a limiter with a custom window length
    pub fn with_window(capacity: usize, window: Duration) -> Self {
        Self {
            capacity,
            window,
            admitted: Mutex::new(VecDeque::new()),
        }
    }

    /// The per-window admission capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check whether a call may proceed right now, recording it if so
    pub fn allow(&self) -> Admission {
        self.allow_at(Instant::now())
    }

    /// Admission check against an explicit clock reading. Exposed to the
    /// crate so tests can advance time deterministically.
    pub(crate) fn allow_at(&self, now: Instant) -> Admission {
        // allow() must always return an answer, poisoned lock included
        let mut admitted = self
            .admitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(cutoff) = now.checked_sub(self.window) {
            while admitted.front().is_some_and(|&t| t <= cutoff) {
                admitted.pop_front();
            }
        }

        if admitted.len() < self.capacity {
            admitted.push_back(now);
            Admission {
                permitted: true,
                remaining: self.capacity - admitted.len(),
            }
        } else {
            Admission {
                permitted: false,
                remaining: 0,
            }
        }
    }
}
