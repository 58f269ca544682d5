//! Random bit-flip fault injector.
//!
//! Flips one uniformly chosen bit of the operand, drawing the position from
//! the unit's pseudo-random stream. Used by the host simulator to model
//! transient single-event upsets against the ECC engine.

use crate::common::Xorshift64;

/// Returns `a` with one uniformly random bit inverted.
pub fn random_flip(a: u64, rng: &mut Xorshift64) -> u64 {
    a ^ (1u64 << rng.next_bit_index())
}
