//! Quadrature transition classification.
//!
//! The two encoder channels form a 2-bit channel state `(A << 1) | B`. A
//! transition is the 4-bit code `(previous << 2) | current`. Because the
//! channels are 90° phase-offset, a valid transition changes exactly one
//! bit, so only 8 of the 16 codes are physically reachable.
//!
//! The decoder recognizes two endpoint codes per direction. Different
//! encoder/board combinations traverse different (equally valid)
//! intermediate-state sequences for the same physical detent depending on
//! which channel leads; matching a single endpoint per direction drops
//! steps on some hardware, while matching both yields exactly one counted
//! step per detent on every observed variant. A single click can only ever
//! complete one of the two endpoints for its direction, so there is no
//! double-counting. Do not "simplify" this down to one code per direction.

/// Direction resolved from a single quadrature transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// One detent step clockwise.
    Clockwise,
    /// One detent step counterclockwise.
    CounterClockwise,
    /// Duplicate sample, intermediate state, or unreachable code.
    None,
}

impl Direction {
    /// Classify a 4-bit transition code.
    ///
    /// Codes that are not one of the four direction endpoints — including
    /// `previous == current` and codes whose states differ by two bits —
    /// classify as [`Direction::None`]. Pure; no side effects.
    pub fn from_transition(code: u8) -> Self {
        match code & 0x0F {
            // B rises while A is high (10 -> 11), or falls while A is
            // low (01 -> 00).
            0b1011 | 0b0100 => Direction::Clockwise,
            // Mirror images of the two codes above.
            0b1110 | 0b0001 => Direction::CounterClockwise,
            _ => Direction::None,
        }
    }
}

/// Pack the instantaneous channel levels into a 2-bit channel state.
pub fn channel_state(a: bool, b: bool) -> u8 {
    (u8::from(a) << 1) | u8::from(b)
}

/// Combine the previous and current channel states into a transition code.
pub fn transition_code(previous: u8, current: u8) -> u8 {
    ((previous << 2) | current) & 0x0F
}
