//! Opcode surface of the execution unit.
//!
//! The unit dispatches on a single flat tag covering every family it
//! implements: scalar integer, packed SIMD, cached, fault, ECC, quantum,
//! float32, float64, and the packed 16-bit float formats. The set is closed
//! and known at build time; dispatch is a plain `match`.

/// Opcode enumeration.
pub mod opcode;

pub use opcode::AluOp;
