//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer side of the execution unit. It handles
//! scalar arithmetic, logical operations, shifts, and comparisons for both
//! 64-bit and 32-bit ("w") operand widths, plus the packed SIMD lane
//! families at widths 32/16/8/4/2.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Mulh, Mulhsu, Mulhu, Div, Divu, Rem, Remu
//!   and their "w" variants, with signed-overflow reporting.
//! - [`logic`]:      And, Or, Xor, Slt, Sltu.
//! - [`shifts`]:     Sll, Srl, Sra and their "w" variants.
//! - [`simd`]:       Saturating packed lanes at widths 32/16/8/4/2.
//! - [`cache`]:      The one-entry operand caches and their lane-split ops.

/// Scalar integer arithmetic with overflow reporting.
pub mod arithmetic;

/// One-entry operand caches and the lane-split 32-bit operations they wrap.
pub mod cache;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

/// Packed SIMD lane operations.
pub mod simd;

use crate::isa::AluOp;

/// Integer execution unit.
///
/// All operations are pure; the stateful operand caches live on
/// [`ExecUnit`](crate::core::ExecUnit), not here.
pub struct Alu;

impl Alu {
    /// Executes an integer operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation tag.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand (also the shift amount for shifts).
    ///
    /// # Returns
    ///
    /// A `(result, overflow)` pair. The overflow flag is meaningful only for
    /// the scalar arithmetic family; every other family reports `false`.
    /// Unhandled tags return `(0, false)`.
    pub fn execute(op: AluOp, a: u64, b: u64) -> (u64, bool) {
        match op {
            AluOp::Add
            | AluOp::Addw
            | AluOp::Sub
            | AluOp::Subw
            | AluOp::Mul
            | AluOp::Mulh
            | AluOp::Mulhsu
            | AluOp::Mulhu
            | AluOp::Mulw
            | AluOp::Div
            | AluOp::Divw
            | AluOp::Divu
            | AluOp::Divuw
            | AluOp::Rem
            | AluOp::Remw
            | AluOp::Remu
            | AluOp::Remuw => arithmetic::execute(op, a, b),

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Slt | AluOp::Sltu => {
                (logic::execute(op, a, b), false)
            }

            AluOp::Sll | AluOp::Sllw | AluOp::Srl | AluOp::Srlw | AluOp::Sra | AluOp::Sraw => {
                (shifts::execute(op, a, b), false)
            }

            AluOp::AddSimd32
            | AluOp::SubSimd32
            | AluOp::MulSimd32
            | AluOp::LoadSimd32
            | AluOp::DivSimd32
            | AluOp::RemSimd32
            | AluOp::AddSimd16
            | AluOp::SubSimd16
            | AluOp::MulSimd16
            | AluOp::LoadSimd16
            | AluOp::DivSimd16
            | AluOp::RemSimd16
            | AluOp::AddSimd8
            | AluOp::SubSimd8
            | AluOp::MulSimd8
            | AluOp::LoadSimd8
            | AluOp::DivSimd8
            | AluOp::RemSimd8
            | AluOp::AddSimd4
            | AluOp::SubSimd4
            | AluOp::MulSimd4
            | AluOp::LoadSimd4
            | AluOp::DivSimd4
            | AluOp::RemSimd4
            | AluOp::AddSimd2
            | AluOp::SubSimd2
            | AluOp::MulSimd2
            | AluOp::LoadSimd2
            | AluOp::DivSimd2
            | AluOp::RemSimd2
            | AluOp::AddSimdB
            | AluOp::SubSimdB
            | AluOp::MulSimdB
            | AluOp::LoadSimdB
            | AluOp::DivSimdB
            | AluOp::RemSimdB => (simd::execute(op, a, b), false),

            // Stateful and non-integer families are not handled here.
            _ => (0, false),
        }
    }
}
