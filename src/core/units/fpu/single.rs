//! Single-precision (binary32) execution path.
//!
//! Operands arrive as 64-bit words whose low 32 bits carry the binary32
//! value. Float-valued results occupy the low 32 bits zero-extended;
//! integer-valued conversion results are sign-extended to 64 bits.
//!
//! Arithmetic is evaluated in f64 (exact for binary32 operands) and then
//! correctly rounded to the requested mode, which is how the software
//! float environment replaces the host rounding register. Exception flags
//! are computed alongside: signaling-NaN operands raise invalid, division
//! by ±0 returns NaN with div-by-zero (including 0/0), out-of-range
//! conversions saturate with invalid, and inexact/overflow/underflow are
//! detected from the rounded result. In-range conversions to integer
//! report no inexact flag.

use crate::core::units::formats;
use crate::core::units::fpu::exception_flags::FpFlags;
use crate::core::units::fpu::nan_handling::{
    canonicalize_f32, fmax_f32, fmin_f32, is_snan_f32, CANONICAL_NAN_F32,
};
use crate::core::units::fpu::rounding::{round_f64_to_f32, round_to_integral_f32, RoundingMode};
use crate::isa::AluOp;
use std::num::FpCategory;

/// Bit mask for the sign bit of a binary32 value.
const F32_SIGN_BIT: u32 = 0x8000_0000;

/// Quiet bit of a binary32 NaN.
const F32_QUIET_BIT: u32 = 0x0040_0000;

/// Executes a single-precision operation.
///
/// # Arguments
///
/// * `op` - The operation to perform.
/// * `a`  - First operand (binary32 in the low 32 bits).
/// * `b`  - Second operand.
/// * `c`  - Third operand for fused multiply-add.
/// * `rm` - The rounding mode for this operation.
///
/// # Returns
///
/// A `(result, flags)` pair. Unhandled tags return `(0, FpFlags::NONE)`.
pub fn execute(op: AluOp, a: u64, b: u64, c: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let fa = f32::from_bits(a as u32);
    let fb = f32::from_bits(b as u32);
    let fc = f32::from_bits(c as u32);

    match op {
        // Integer addition routed through the float dispatcher is honored
        // as a plain wrapping add with no flags.
        AluOp::Add => ((a as i64).wrapping_add(b as i64) as u64, FpFlags::NONE),

        // ── Arithmetic ─────────────────────────────────────────────────
        AluOp::FAddS => arith(fa as f64 + fb as f64, &[fa, fb], rm),
        AluOp::FSubS => arith(fa as f64 - fb as f64, &[fa, fb], rm),
        AluOp::FMulS => arith(fa as f64 * fb as f64, &[fa, fb], rm),
        AluOp::FDivS => {
            if fb == 0.0 {
                (CANONICAL_NAN_F32 as u64, FpFlags::DZ)
            } else {
                arith(fa as f64 / fb as f64, &[fa, fb], rm)
            }
        }
        AluOp::FSqrtS => {
            if fa < 0.0 {
                (CANONICAL_NAN_F32 as u64, FpFlags::NV)
            } else {
                arith((fa as f64).sqrt(), &[fa], rm)
            }
        }

        // ── Fused multiply-add family ──────────────────────────────────
        AluOp::FMAddS => arith((fa as f64).mul_add(fb as f64, fc as f64), &[fa, fb, fc], rm),
        AluOp::FMSubS => arith((fa as f64).mul_add(fb as f64, -(fc as f64)), &[fa, fb, fc], rm),
        AluOp::FNMAddS => arith((-(fa as f64)).mul_add(fb as f64, -(fc as f64)), &[fa, fb, fc], rm),
        AluOp::FNMSubS => arith((-(fa as f64)).mul_add(fb as f64, fc as f64), &[fa, fb, fc], rm),

        // ── Sign injection (raw bit operations) ────────────────────────
        AluOp::FSgnjS => {
            let bits = (a as u32 & !F32_SIGN_BIT) | (b as u32 & F32_SIGN_BIT);
            (bits as u64, FpFlags::NONE)
        }
        AluOp::FSgnjnS => {
            let bits = (a as u32 & !F32_SIGN_BIT) | (!(b as u32) & F32_SIGN_BIT);
            (bits as u64, FpFlags::NONE)
        }
        AluOp::FSgnjxS => {
            let bits = (a as u32) ^ (b as u32 & F32_SIGN_BIT);
            (bits as u64, FpFlags::NONE)
        }

        // ── Min/Max ────────────────────────────────────────────────────
        AluOp::FMinS => (fmin_f32(fa, fb).to_bits() as u64, snan_flags(&[fa, fb])),
        AluOp::FMaxS => (fmax_f32(fa, fb).to_bits() as u64, snan_flags(&[fa, fb])),

        // ── Comparisons (NaN yields 0, no invalid flag) ────────────────
        AluOp::FEqS => (compare(fa, fb, |x, y| x == y), FpFlags::NONE),
        AluOp::FLtS => (compare(fa, fb, |x, y| x < y), FpFlags::NONE),
        AluOp::FLeS => (compare(fa, fb, |x, y| x <= y), FpFlags::NONE),

        // ── Classification ─────────────────────────────────────────────
        AluOp::FClassS => (classify(fa) as u64, FpFlags::NONE),

        // ── Conversions: float → integer (saturating) ──────────────────
        AluOp::FCvtWS => {
            if !fa.is_finite() || fa > i32::MAX as f32 || fa < i32::MIN as f32 {
                // NaN fails the `> 0` test and saturates low.
                let saturated = if fa > 0.0 { i32::MAX } else { i32::MIN };
                (saturated as i64 as u64, FpFlags::NV)
            } else {
                let result = round_to_integral_f32(fa, rm) as i32;
                (result as i64 as u64, FpFlags::NONE)
            }
        }
        AluOp::FCvtWuS => {
            if !fa.is_finite() || fa > u32::MAX as f32 || fa < 0.0 {
                let saturated: u32 = if fa < 0.0 { 0 } else { u32::MAX };
                (saturated as i32 as i64 as u64, FpFlags::NV)
            } else {
                let result = round_to_integral_f32(fa, rm) as u32;
                (result as i32 as i64 as u64, FpFlags::NONE)
            }
        }
        AluOp::FCvtLS => {
            if !fa.is_finite() || fa > i64::MAX as f32 || fa < i64::MIN as f32 {
                let saturated = if fa < 0.0 { i64::MIN } else { i64::MAX };
                (saturated as u64, FpFlags::NV)
            } else {
                let result = round_to_integral_f32(fa, rm) as i64;
                (result as u64, FpFlags::NONE)
            }
        }
        AluOp::FCvtLuS => {
            if !fa.is_finite() || fa > u64::MAX as f32 || fa < 0.0 {
                let saturated: u64 = if fa < 0.0 { 0 } else { u64::MAX };
                (saturated, FpFlags::NV)
            } else {
                let result = round_to_integral_f32(fa, rm) as u64;
                (result, FpFlags::NONE)
            }
        }

        // ── Conversions: integer → float ───────────────────────────────
        AluOp::FCvtSW => int_to_single(a as i32 as f64, rm),
        AluOp::FCvtSWu => int_to_single(a as u32 as f64, rm),
        AluOp::FCvtSL => int_to_single(a as i64 as f64, rm),
        AluOp::FCvtSLu => int_to_single(a as f64, rm),

        // ── Bit moves ──────────────────────────────────────────────────
        AluOp::FMvXW => (a as u32 as i32 as i64 as u64, FpFlags::NONE),
        AluOp::FMvWX => (a & 0xFFFF_FFFF, FpFlags::NONE),

        // ── Packed 16-bit formats ──────────────────────────────────────
        AluOp::FAddBf16
        | AluOp::FSubBf16
        | AluOp::FMulBf16
        | AluOp::FMaxBf16
        | AluOp::FMAddBf16 => (formats::bf16::execute(op, a, b, c), FpFlags::NONE),
        AluOp::FAddFp16
        | AluOp::FSubFp16
        | AluOp::FMulFp16
        | AluOp::FMaxFp16
        | AluOp::FMAddFp16
        | AluOp::FDotFp16 => (formats::fp16::execute(op, a, b, c), FpFlags::NONE),
        AluOp::FAddMsfp16
        | AluOp::FSubMsfp16
        | AluOp::FMulMsfp16
        | AluOp::FMaxMsfp16
        | AluOp::FMAddMsfp16 => (formats::msfp16::execute(op, a, b, c), FpFlags::NONE),

        _ => (0, FpFlags::NONE),
    }
}

/// Rounds an f64-evaluated arithmetic result and derives its flags.
fn arith(exact: f64, operands: &[f32], rm: RoundingMode) -> (u64, FpFlags) {
    let mut flags = snan_flags(operands);
    let rounded = round_f64_to_f32(exact, rm);
    let inputs_finite = operands.iter().all(|f| f.is_finite());
    if rounded.is_infinite() && inputs_finite {
        flags |= FpFlags::OF | FpFlags::NX;
    } else if !exact.is_nan() && rounded as f64 != exact {
        flags |= FpFlags::NX;
        if rounded.is_subnormal() || (rounded == 0.0 && exact != 0.0) {
            flags |= FpFlags::UF;
        }
    }
    (canonicalize_f32(rounded).to_bits() as u64, flags)
}

/// Invalid flag for signaling-NaN operands.
fn snan_flags(operands: &[f32]) -> FpFlags {
    if operands.iter().any(|f| is_snan_f32(*f)) {
        FpFlags::NV
    } else {
        FpFlags::NONE
    }
}

/// NaN-rejecting boolean comparison producing 0 or 1.
fn compare(fa: f32, fb: f32, predicate: impl Fn(f32, f32) -> bool) -> u64 {
    if fa.is_nan() || fb.is_nan() {
        0
    } else {
        predicate(fa, fb) as u64
    }
}

/// Integer-to-single conversion with inexact detection.
fn int_to_single(exact: f64, rm: RoundingMode) -> (u64, FpFlags) {
    let rounded = round_f64_to_f32(exact, rm);
    let flags = if rounded as f64 != exact {
        FpFlags::NX
    } else {
        FpFlags::NONE
    };
    (rounded.to_bits() as u64, flags)
}

/// 10-bit one-hot classification of a binary32 value.
///
/// Bit order: −∞, −normal, −subnormal, −0, +0, +subnormal, +normal, +∞,
/// signaling NaN, quiet NaN.
pub fn classify(fa: f32) -> u16 {
    let bits = fa.to_bits();
    match (fa.classify(), fa.is_sign_negative()) {
        (FpCategory::Infinite, true) => 1 << 0,
        (FpCategory::Normal, true) => 1 << 1,
        (FpCategory::Subnormal, true) => 1 << 2,
        (FpCategory::Zero, true) => 1 << 3,
        (FpCategory::Zero, false) => 1 << 4,
        (FpCategory::Subnormal, false) => 1 << 5,
        (FpCategory::Normal, false) => 1 << 6,
        (FpCategory::Infinite, false) => 1 << 7,
        (FpCategory::Nan, _) => {
            if bits & F32_QUIET_BIT == 0 {
                1 << 8
            } else {
                1 << 9
            }
        }
    }
}
