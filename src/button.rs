//! Time-based button debounce with one-shot edge detection.

use embassy_time::{Duration, Instant};

/// Debounced two-state button with one-shot press/release edges.
///
/// Driven entirely by polling: feed it the current (already
/// polarity-corrected) level and a timestamp on every call to
/// [`update`](Self::update). A raw level change restarts the stability
/// window; only a level that has held steady for the full window commits
/// a new debounced state and raises the matching edge flag.
///
/// Debouncing is time-based rather than poll-count-based, so an
/// arbitrarily slow polling cadence stays correct — it just delays when
/// edges are reported. Poll at 10-50 ms for human-speed interaction.
pub struct DebouncedButton {
    raw_pressed: bool,
    stable_pressed: bool,
    last_change: Instant,
    press_start: Instant,
    window: Duration,
    pressed_edge: bool,
    released_edge: bool,
}

impl DebouncedButton {
    /// Create a button whose debounce baseline is the level observed at
    /// construction time. A button already held at construction reads as
    /// pressed but raises no press edge.
    pub fn new(initial_pressed: bool, window: Duration, now: Instant) -> Self {
        Self {
            raw_pressed: initial_pressed,
            stable_pressed: initial_pressed,
            last_change: now,
            press_start: now,
            window,
            pressed_edge: false,
            released_edge: false,
        }
    }

    /// Feed one raw sample taken at `now`.
    pub fn update(&mut self, pressed: bool, now: Instant) {
        if pressed != self.raw_pressed {
            // New raw level: restart the stability window without touching
            // the debounced state.
            self.raw_pressed = pressed;
            self.last_change = now;
        }

        if self.raw_pressed != self.stable_pressed && self.elapsed(now) >= self.window.as_ticks() {
            self.stable_pressed = self.raw_pressed;
            if self.stable_pressed {
                self.pressed_edge = true;
                self.press_start = now;
            } else {
                self.released_edge = true;
            }
        }
    }

    fn elapsed(&self, now: Instant) -> u64 {
        now.as_ticks().wrapping_sub(self.last_change.as_ticks())
    }

    /// Current debounced state. No side effects.
    pub fn is_pressed(&self) -> bool {
        self.stable_pressed
    }

    /// True exactly once per committed press.
    pub fn was_pressed(&mut self) -> bool {
        core::mem::take(&mut self.pressed_edge)
    }

    /// True exactly once per committed release.
    pub fn was_released(&mut self) -> bool {
        core::mem::take(&mut self.released_edge)
    }

    /// Time held so far, or zero while released.
    pub fn pressed_duration(&self, now: Instant) -> Duration {
        if self.stable_pressed {
            Duration::from_ticks(now.as_ticks().wrapping_sub(self.press_start.as_ticks()))
        } else {
            Duration::from_ticks(0)
        }
    }
}
