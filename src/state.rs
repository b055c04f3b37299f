//! State shared between the decode context and the application context.

use core::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use crate::quadrature::Direction;

/// Position counter plus teardown flag.
///
/// This is the only state shared across the two execution contexts, and
/// every field has a single designated writer: the position is mutated
/// exclusively by the decode step and the detach flag exclusively by the
/// application. Cross-context visibility therefore needs nothing beyond
/// single atomic loads and stores — deliberately no mutex, channel, or
/// queue. A reader may observe a value that is one step stale, never a
/// torn one.
///
/// `const`-constructible so it can live in a `static`:
///
/// ```ignore
/// static STATE: EncoderState = EncoderState::new();
/// ```
pub struct EncoderState {
    position: AtomicI32,
    detached: AtomicBool,
}

impl EncoderState {
    /// Create a state with the counter at zero.
    pub const fn new() -> Self {
        Self {
            position: AtomicI32::new(0),
            detached: AtomicBool::new(false),
        }
    }

    /// Most recently committed counter value.
    pub fn position(&self) -> i32 {
        self.position.load(Ordering::Relaxed)
    }

    /// Overwrite the counter.
    pub fn set_position(&self, value: i32) {
        self.position.store(value, Ordering::Relaxed);
    }

    /// Set the counter back to zero.
    pub fn reset_position(&self) {
        self.set_position(0);
    }

    /// Stop the decode context. Idempotent; see
    /// [`RotaryEncoder::detach`](crate::RotaryEncoder::detach).
    pub fn detach(&self) {
        self.detached.store(true, Ordering::Relaxed);
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Relaxed)
    }

    pub(crate) fn rearm(&self) {
        self.detached.store(false, Ordering::Relaxed);
    }

    /// Apply one classified transition to the counter.
    ///
    /// Load+store instead of `fetch_add`: the decode step is the sole
    /// writer, and plain stores keep the driver off atomic RMW ops that
    /// thumbv6 cores lack.
    pub(crate) fn apply(&self, direction: Direction) {
        let delta = match direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
            Direction::None => return,
        };
        let next = self.position.load(Ordering::Relaxed).wrapping_add(delta);
        self.position.store(next, Ordering::Relaxed);
    }
}

impl Default for EncoderState {
    fn default() -> Self {
        Self::new()
    }
}
