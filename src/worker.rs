//! Decode loop — the interrupt-context half of the driver.

use embassy_futures::select::{select, Either};
use embassy_time::Instant;
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::debounce::RotationDebounce;
use crate::error::EncoderError;
use crate::quadrature::{channel_state, transition_code, Direction};
use crate::state::EncoderState;

/// Owns the two quadrature pins and runs the decode loop.
///
/// Constructed by [`RotaryEncoder::init`](crate::RotaryEncoder::init) with
/// the channel state at that moment as its baseline. Hand it to a
/// dedicated task and await [`run`](Self::run).
///
/// The transition gate and previous channel state live here, not in the
/// shared [`EncoderState`], because only the decode context ever touches
/// them.
pub struct EncoderWorker<'d, A, B> {
    state: &'d EncoderState,
    pin_a: A,
    pin_b: B,
    previous: u8,
    gate: RotationDebounce,
}

impl<'d, A, B, E> EncoderWorker<'d, A, B>
where
    A: InputPin<Error = E>,
    B: InputPin<Error = E>,
{
    pub(crate) fn new(
        state: &'d EncoderState,
        pin_a: A,
        pin_b: B,
        previous: u8,
        gate: RotationDebounce,
    ) -> Self {
        Self {
            state,
            pin_a,
            pin_b,
            previous,
            gate,
        }
    }

    /// Execute one decode step for an edge observed at `now`.
    ///
    /// This is the body the pin interrupt drives via [`run`](Self::run);
    /// platforms that deliver edges through their own callback mechanism
    /// can call it directly from the handler. It completes in a bounded
    /// number of instructions and never blocks, allocates, or logs.
    ///
    /// The step: bail out if detached, sample both channels, time-gate
    /// the transition, classify it, adjust the counter. A gate-rejected
    /// sample is discarded entirely — the previous channel state advances
    /// only on accepted samples, so a bounce burst inside the gate window
    /// commits at most the one step of its first edge.
    pub fn on_edge(&mut self, now: Instant) -> Result<(), EncoderError<E>> {
        if self.state.is_detached() {
            return Ok(());
        }

        let a = self.pin_a.is_high()?;
        let b = self.pin_b.is_high()?;

        if !self.gate.accept(now) {
            return Ok(());
        }

        let current = channel_state(a, b);
        let code = transition_code(self.previous, current);
        self.state.apply(Direction::from_transition(code));
        self.previous = current;

        Ok(())
    }

    /// Await channel edges and decode them until detached.
    ///
    /// Each loop iteration parks on whichever quadrature pin edges first;
    /// the pin interrupt wakes the future and [`on_edge`](Self::on_edge)
    /// runs once. Edges are processed strictly in arrival order — there is
    /// no queueing.
    ///
    /// Returns `Ok(())` on the first wake after
    /// [`detach`](crate::RotaryEncoder::detach), dropping the pins and
    /// releasing their interrupt resources. Cancelling (dropping) this
    /// future instead is equally safe: the pending edge-wait futures
    /// disarm their wakers on drop, so no callback can fire afterwards.
    pub async fn run(mut self) -> Result<(), EncoderError<E>>
    where
        A: Wait<Error = E>,
        B: Wait<Error = E>,
    {
        loop {
            match select(self.pin_a.wait_for_any_edge(), self.pin_b.wait_for_any_edge()).await {
                Either::First(edge) | Either::Second(edge) => edge?,
            }

            if self.state.is_detached() {
                return Ok(());
            }

            self.on_edge(Instant::now())?;
        }
    }
}
