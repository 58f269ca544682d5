//! Sub-engines of the execution unit.
//!
//! Each engine is pure over its inputs; the only cross-call state (operand
//! caches, the random stream) lives on [`ExecUnit`](crate::core::ExecUnit)
//! and is passed in where needed.

/// Integer engine: scalar arithmetic, logic, shifts, SIMD, operand caches.
pub mod alu;

/// Hamming(64,57) SECDED engine.
pub mod ecc;

/// Random single-bit-flip fault injector.
pub mod fault;

/// Packed 16-bit float formats (bfloat16, binary16, microscaling).
pub mod formats;

/// Floating-point engines (binary32, binary64).
pub mod fpu;

/// Fixed-point complex amplitude engine.
pub mod quantum;
