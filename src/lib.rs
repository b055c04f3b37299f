//! Interrupt-driven quadrature rotary encoder driver with a debounced
//! push button.
//!
//! The driver decodes the two-phase signal of a mechanical rotary encoder
//! into a signed step counter and debounces the encoder's integrated push
//! button, without using a single lock anywhere.
//!
//! # Architecture
//!
//! The driver is split into two halves that share one piece of state:
//!
//! - **[`EncoderWorker`]** — the interrupt-context half. Its
//!   [`run`](EncoderWorker::run) future sleeps until either quadrature
//!   channel edges (the pin interrupt wakes it), then executes one bounded
//!   decode step: time-gate the transition, classify it, adjust the
//!   counter.
//! - **[`RotaryEncoder`]** — the application-context half. Polled
//!   periodically via [`update`](RotaryEncoder::update), it debounces the
//!   push button and exposes the position counter.
//! - **[`EncoderState`]** — the shared state between the two: an atomic
//!   position counter and a detach flag. Each field has exactly one
//!   writer, so cross-context visibility needs nothing more than single
//!   atomic loads and stores.
//!
//! # Quick start
//!
//! ```ignore
//! use rotary_encoder_driver::{EncoderConfig, EncoderState, RotaryEncoder};
//!
//! static STATE: EncoderState = EncoderState::new();
//!
//! // Pins must be configured as pulled-up inputs; `a` and `b` must also
//! // support async edge waiting (`embedded_hal_async::digital::Wait`).
//! let (mut knob, worker) =
//!     RotaryEncoder::init(&STATE, a, b, button, EncoderConfig::default())?;
//!
//! // Drive the decode loop from its own task:
//! spawner.spawn(decode_task(worker)).unwrap();
//!
//! // Poll the button and read the position at 10-50 ms cadence:
//! loop {
//!     knob.update()?;
//!     if knob.was_button_pressed() {
//!         knob.reset_position();
//!     }
//!     defmt::info!("position: {}", knob.position());
//!     Timer::after_millis(20).await;
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on public
//!   types for embedded logging. Nothing is ever logged from the decode
//!   path itself.

#![no_std]

pub mod button;
pub mod debounce;
pub mod encoder;
pub mod error;
pub mod quadrature;
pub mod state;
pub mod worker;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use button::DebouncedButton;
pub use encoder::{EncoderConfig, RotaryEncoder, BUTTON_DEBOUNCE, ROTATION_DEBOUNCE};
pub use error::EncoderError;
pub use quadrature::Direction;
pub use state::EncoderState;
pub use worker::EncoderWorker;

pub use embassy_time::{Duration, Instant};
