//! Time gate for quadrature transitions.

use embassy_time::{Duration, Instant};

/// Rejects transitions that arrive too soon after the last accepted one.
///
/// Mechanical encoder contacts bounce for a few hundred microseconds per
/// edge; a short minimum interval (1 ms by default, see
/// [`ROTATION_DEBOUNCE`](crate::ROTATION_DEBOUNCE)) filters the bounce
/// without discarding legitimately fast consecutive detents.
///
/// Runs in the decode path, so it never blocks, allocates, or logs; a
/// rejected transition simply produces no effect.
pub struct RotationDebounce {
    last_accepted: Option<Instant>,
    interval: Duration,
}

impl RotationDebounce {
    /// Create a gate with the given minimum interval between accepted
    /// transitions. The first transition is always accepted.
    pub fn new(interval: Duration) -> Self {
        Self {
            last_accepted: None,
            interval,
        }
    }

    /// Accept or reject a transition arriving at `now`.
    ///
    /// Accepting moves the gate's reference point to `now`; rejecting
    /// leaves it unchanged. The elapsed interval is computed with wrapping
    /// tick arithmetic so a wrapped clock never yields a spuriously huge
    /// or negative delta.
    pub fn accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            let elapsed = now.as_ticks().wrapping_sub(last.as_ticks());
            if elapsed < self.interval.as_ticks() {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}
