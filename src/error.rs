//! Error types for the rotary encoder driver.

use core::fmt;

/// Errors that can occur while sampling the encoder's input pins.
///
/// Spurious or bouncing transitions are *not* errors — the decode path
/// silently classifies them as no step.
#[derive(Debug)]
pub enum EncoderError<E> {
    /// Underlying GPIO error from one of the input pins.
    Pin(E),
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Pin(e) => write!(f, "pin error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Pin(e) => defmt::write!(f, "pin error: {}", e),
        }
    }
}
