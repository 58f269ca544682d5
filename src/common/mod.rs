//! Common utilities shared across the execution unit.
//!
//! This module provides the building blocks used by every sub-engine:
//! 1. **Constants:** Lane geometry and saturation bounds for the packed
//!    integer families.
//! 2. **Randomness:** The per-instance pseudo-random stream used by the
//!    fault injector and the amplitude engine.

/// Lane geometry and saturation constants.
pub mod constants;

/// Xorshift pseudo-random stream.
pub mod rng;

pub use rng::Xorshift64;
