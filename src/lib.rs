//! Numeric execution unit for a 64-bit ISA simulator.
//!
//! This crate implements the arithmetic core of an instruction-set simulator:
//! 1. **Integer:** Scalar 64/32-bit arithmetic, logic, shifts, comparisons,
//!    and packed SIMD lanes at widths 32/16/8/4/2 with saturation.
//! 2. **Floating point:** IEEE 754 binary32/binary64 arithmetic, fused
//!    multiply-add, conversions, classification, and sign injection with
//!    software rounding-mode emulation and sticky exception flags.
//! 3. **Packed formats:** bfloat16, binary16 (including a 4-lane dot
//!    product), and a shared-exponent microscaling format.
//! 4. **Extensions:** Hamming(64,57) SECDED arithmetic, one-entry operand
//!    caches, a random bit-flip fault injector, and a fixed-point complex
//!    amplitude engine.
//!
//! The surrounding layers (decoder, register file, memory, pipeline) are
//! external collaborators: the unit consumes `(opcode, a, b, c, rm)` tuples
//! and returns `(result, flags)`.

/// Common constants and the pseudo-random stream.
pub mod common;
/// Execution unit configuration (defaults, deserializable structure).
pub mod config;
/// The execution unit (dispatch, operand caches, sub-engines).
pub mod core;
/// Opcode surface consumed by the dispatcher.
pub mod isa;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main execution unit type; holds the operand caches and random stream.
pub use crate::core::ExecUnit;
/// Opcode tag dispatched by the unit.
pub use crate::isa::AluOp;
