//! High-level interface for the rotary encoder — the application-context
//! half of the driver.
//!
//! [`RotaryEncoder`] owns the button pin and the position/teardown API;
//! its sibling [`EncoderWorker`] owns the quadrature pins and the decode
//! loop. [`RotaryEncoder::init`] constructs both halves over a shared
//! [`EncoderState`].

use embassy_time::{Duration, Instant};
use embedded_hal::digital::InputPin;

use crate::button::DebouncedButton;
use crate::debounce::RotationDebounce;
use crate::error::EncoderError;
use crate::quadrature::channel_state;
use crate::state::EncoderState;
use crate::worker::EncoderWorker;

/// Default minimum interval between accepted quadrature transitions.
pub const ROTATION_DEBOUNCE: Duration = Duration::from_millis(1);

/// Default stability window for the push button.
pub const BUTTON_DEBOUNCE: Duration = Duration::from_millis(50);

/// Debounce timing parameters.
#[derive(Debug, Clone, Copy)]
pub struct EncoderConfig {
    /// Minimum interval between accepted quadrature transitions.
    pub rotation_debounce: Duration,
    /// How long the raw button level must hold steady before a new state
    /// is committed.
    pub button_debounce: Duration,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            rotation_debounce: ROTATION_DEBOUNCE,
            button_debounce: BUTTON_DEBOUNCE,
        }
    }
}

/// Application-side handle: button polling, position queries, teardown.
///
/// Call [`update`](Self::update) periodically (10-50 ms cadence is right
/// for human-speed interaction) to run the button debounce; rotation needs
/// no periodic call — the decode loop is driven entirely by pin edges.
pub struct RotaryEncoder<'d, BTN> {
    state: &'d EncoderState,
    pin: BTN,
    button: DebouncedButton,
}

impl<'d, BTN, E> RotaryEncoder<'d, BTN>
where
    BTN: InputPin<Error = E>,
{
    /// Construct both halves of the driver.
    ///
    /// All three pins must already be configured as inputs with pull
    /// resistors enabled; `pin_a` and `pin_b` additionally need async
    /// edge waiting for [`EncoderWorker::run`]. The channel and button
    /// levels at this moment become the debounce baselines, so a button
    /// held during init reads as pressed without raising a press edge.
    ///
    /// # Errors
    ///
    /// [`EncoderError::Pin`] if sampling any pin fails. No driver value
    /// exists in that case, so no other operation can run half-initialized.
    pub fn init<A, B>(
        state: &'d EncoderState,
        mut pin_a: A,
        mut pin_b: B,
        mut button: BTN,
        config: EncoderConfig,
    ) -> Result<(Self, EncoderWorker<'d, A, B>), EncoderError<E>>
    where
        A: InputPin<Error = E>,
        B: InputPin<Error = E>,
    {
        state.rearm();

        let a = pin_a.is_high()?;
        let b = pin_b.is_high()?;
        // Active-low: the pull-up keeps the line high until the button
        // shorts it to ground.
        let pressed = button.is_low()?;
        let now = Instant::now();

        let worker = EncoderWorker::new(
            state,
            pin_a,
            pin_b,
            channel_state(a, b),
            RotationDebounce::new(config.rotation_debounce),
        );
        let encoder = Self {
            state,
            pin: button,
            button: DebouncedButton::new(pressed, config.button_debounce, now),
        };

        Ok((encoder, worker))
    }

    // -----------------------------------------------------------------------
    // Button polling
    // -----------------------------------------------------------------------

    /// Re-sample the button and run one debounce/edge-detect step.
    pub fn update(&mut self) -> Result<(), EncoderError<E>> {
        let pressed = self.pin.is_low()?;
        self.button.update(pressed, Instant::now());
        Ok(())
    }

    /// Current debounced button state.
    pub fn is_button_pressed(&self) -> bool {
        self.button.is_pressed()
    }

    /// True exactly once per debounced press.
    pub fn was_button_pressed(&mut self) -> bool {
        self.button.was_pressed()
    }

    /// True exactly once per debounced release.
    pub fn was_button_released(&mut self) -> bool {
        self.button.was_released()
    }

    /// Time the button has been held, or zero while released.
    pub fn pressed_duration(&self) -> Duration {
        self.button.pressed_duration(Instant::now())
    }

    // -----------------------------------------------------------------------
    // Position counter
    // -----------------------------------------------------------------------

    /// Most recently committed position. A single atomic load; never
    /// blocks, may be one step behind an in-flight edge.
    pub fn position(&self) -> i32 {
        self.state.position()
    }

    /// Set the position counter back to zero.
    pub fn reset_position(&self) {
        self.state.reset_position();
    }

    /// Overwrite the position counter.
    pub fn set_position(&self, value: i32) {
        self.state.set_position(value);
    }

    // -----------------------------------------------------------------------
    // Teardown
    // -----------------------------------------------------------------------

    /// Stop the decode context.
    ///
    /// After this returns, no decode step will commit another counter
    /// change; the worker's [`run`](EncoderWorker::run) future returns on
    /// its next wake and releases the pin interrupt resources. Calling
    /// this when already detached is a no-op. Also callable directly on
    /// [`EncoderState`] if init never completed.
    pub fn detach(&mut self) {
        self.state.detach();
    }
}

impl<BTN> Drop for RotaryEncoder<'_, BTN> {
    fn drop(&mut self) {
        self.state.detach();
    }
}
