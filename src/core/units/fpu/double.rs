//! Double-precision (binary64) execution path.
//!
//! Mirror of the single-precision engine at binary64, plus the bridges to
//! binary32 (`FCvtSD` / `FCvtDS`) and the bit-reinterpret moves.
//!
//! There is no wider evaluation format available, so binary64 arithmetic
//! is computed directly in the default rounding; the requested mode is
//! honored exactly for the conversions, which is where it is observable
//! in practice. Overflow and underflow are detected from the result;
//! general binary64 inexact detection is not attempted.

use crate::core::units::fpu::exception_flags::FpFlags;
use crate::core::units::fpu::nan_handling::{
    canonicalize_f64, fmax_f64, fmin_f64, is_snan_f64, CANONICAL_NAN_F64,
};
use crate::core::units::fpu::rounding::{round_f64_to_f32, round_to_integral_f64, RoundingMode};
use crate::isa::AluOp;
use std::num::FpCategory;

/// Bit mask for the sign bit of a binary64 value.
const F64_SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// Quiet bit of a binary64 NaN.
const F64_QUIET_BIT: u64 = 0x0008_0000_0000_0000;

/// Executes a double-precision operation.
///
/// # Arguments
///
/// * `op` - The operation to perform.
/// * `a`  - First operand (binary64 bits).
/// * `b`  - Second operand.
/// * `c`  - Third operand for fused multiply-add.
/// * `rm` - The rounding mode for this operation.
///
/// # Returns
///
/// A `(result, flags)` pair. Unhandled tags return `(0, FpFlags::NONE)`.
pub fn execute(op: AluOp, a: u64, b: u64, c: u64, rm: RoundingMode) -> (u64, FpFlags) {
    let fa = f64::from_bits(a);
    let fb = f64::from_bits(b);
    let fc = f64::from_bits(c);

    match op {
        AluOp::Add => ((a as i64).wrapping_add(b as i64) as u64, FpFlags::NONE),

        // ── Arithmetic ─────────────────────────────────────────────────
        AluOp::FAddD => arith(fa + fb, &[fa, fb]),
        AluOp::FSubD => arith(fa - fb, &[fa, fb]),
        AluOp::FMulD => arith(fa * fb, &[fa, fb]),
        AluOp::FDivD => {
            if fb == 0.0 {
                (CANONICAL_NAN_F64, FpFlags::DZ)
            } else {
                arith(fa / fb, &[fa, fb])
            }
        }
        AluOp::FSqrtD => {
            if fa < 0.0 {
                (CANONICAL_NAN_F64, FpFlags::NV)
            } else {
                arith(fa.sqrt(), &[fa])
            }
        }

        // ── Fused multiply-add family ──────────────────────────────────
        AluOp::FMAddD => arith(fa.mul_add(fb, fc), &[fa, fb, fc]),
        AluOp::FMSubD => arith(fa.mul_add(fb, -fc), &[fa, fb, fc]),
        AluOp::FNMAddD => arith((-fa).mul_add(fb, -fc), &[fa, fb, fc]),
        AluOp::FNMSubD => arith((-fa).mul_add(fb, fc), &[fa, fb, fc]),

        // ── Sign injection ─────────────────────────────────────────────
        AluOp::FSgnjD => ((a & !F64_SIGN_BIT) | (b & F64_SIGN_BIT), FpFlags::NONE),
        AluOp::FSgnjnD => ((a & !F64_SIGN_BIT) | (!b & F64_SIGN_BIT), FpFlags::NONE),
        AluOp::FSgnjxD => (a ^ (b & F64_SIGN_BIT), FpFlags::NONE),

        // ── Min/Max ────────────────────────────────────────────────────
        AluOp::FMinD => (fmin_f64(fa, fb).to_bits(), snan_flags(&[fa, fb])),
        AluOp::FMaxD => (fmax_f64(fa, fb).to_bits(), snan_flags(&[fa, fb])),

        // ── Comparisons ────────────────────────────────────────────────
        AluOp::FEqD => (compare(fa, fb, |x, y| x == y), FpFlags::NONE),
        AluOp::FLtD => (compare(fa, fb, |x, y| x < y), FpFlags::NONE),
        AluOp::FLeD => (compare(fa, fb, |x, y| x <= y), FpFlags::NONE),

        // ── Classification ─────────────────────────────────────────────
        AluOp::FClassD => (classify(fa) as u64, FpFlags::NONE),

        // ── Conversions: float → integer (saturating) ──────────────────
        AluOp::FCvtWD => {
            if !fa.is_finite() || fa > i32::MAX as f64 || fa < i32::MIN as f64 {
                // NaN fails the `< 0` test and saturates high here, the
                // opposite of the single-precision engine.
                let saturated = if fa < 0.0 { i32::MIN } else { i32::MAX };
                (saturated as i64 as u64, FpFlags::NV)
            } else {
                let result = round_to_integral_f64(fa, rm) as i32;
                (result as i64 as u64, FpFlags::NONE)
            }
        }
        AluOp::FCvtWuD => {
            if !fa.is_finite() || fa > u32::MAX as f64 || fa < 0.0 {
                let saturated: u32 = if fa < 0.0 { 0 } else { u32::MAX };
                (saturated as i32 as i64 as u64, FpFlags::NV)
            } else {
                let result = round_to_integral_f64(fa, rm) as u32;
                (result as i32 as i64 as u64, FpFlags::NONE)
            }
        }
        AluOp::FCvtLD => {
            if !fa.is_finite() || fa > i64::MAX as f64 || fa < i64::MIN as f64 {
                let saturated = if fa < 0.0 { i64::MIN } else { i64::MAX };
                (saturated as u64, FpFlags::NV)
            } else {
                let result = round_to_integral_f64(fa, rm) as i64;
                (result as u64, FpFlags::NONE)
            }
        }
        AluOp::FCvtLuD => {
            if !fa.is_finite() || fa > u64::MAX as f64 || fa < 0.0 {
                let saturated: u64 = if fa < 0.0 { 0 } else { u64::MAX };
                (saturated, FpFlags::NV)
            } else {
                let result = round_to_integral_f64(fa, rm) as u64;
                (result, FpFlags::NONE)
            }
        }

        // ── Conversions: integer → float ───────────────────────────────
        AluOp::FCvtDW => ((a as i32 as f64).to_bits(), FpFlags::NONE),
        AluOp::FCvtDWu => ((a as u32 as f64).to_bits(), FpFlags::NONE),
        AluOp::FCvtDL => {
            let la = a as i64;
            let result = la as f64;
            let flags = if result as i128 != la as i128 {
                FpFlags::NX
            } else {
                FpFlags::NONE
            };
            (result.to_bits(), flags)
        }
        AluOp::FCvtDLu => {
            let result = a as f64;
            let flags = if result as u128 != a as u128 {
                FpFlags::NX
            } else {
                FpFlags::NONE
            };
            (result.to_bits(), flags)
        }

        // ── Bridges to binary32 ────────────────────────────────────────
        AluOp::FCvtSD => {
            let mut flags = snan_flags(&[fa]);
            let rounded = round_f64_to_f32(fa, rm);
            if rounded.is_infinite() && fa.is_finite() {
                flags |= FpFlags::OF | FpFlags::NX;
            } else if !fa.is_nan() && rounded as f64 != fa {
                flags |= FpFlags::NX;
                if rounded.is_subnormal() || (rounded == 0.0 && fa != 0.0) {
                    flags |= FpFlags::UF;
                }
            }
            let bits = if rounded.is_nan() {
                crate::core::units::fpu::nan_handling::CANONICAL_NAN_F32
            } else {
                rounded.to_bits()
            };
            (bits as u64, flags)
        }
        AluOp::FCvtDS => {
            let fs = f32::from_bits(a as u32);
            let flags = if is_snan_f32_bits(a as u32) {
                FpFlags::NV
            } else {
                FpFlags::NONE
            };
            (canonicalize_f64(fs as f64).to_bits(), flags)
        }

        // ── Bit moves (identity at binary64) ───────────────────────────
        AluOp::FMvDX | AluOp::FMvXD => (a, FpFlags::NONE),

        _ => (0, FpFlags::NONE),
    }
}

/// Derives flags from a directly computed binary64 result.
fn arith(result: f64, operands: &[f64]) -> (u64, FpFlags) {
    let mut flags = snan_flags(operands);
    if result.is_infinite() && operands.iter().all(|f| f.is_finite()) {
        flags |= FpFlags::OF | FpFlags::NX;
    } else if result.is_subnormal() {
        flags |= FpFlags::UF;
    }
    (canonicalize_f64(result).to_bits(), flags)
}

/// Invalid flag for signaling-NaN operands.
fn snan_flags(operands: &[f64]) -> FpFlags {
    if operands.iter().any(|f| is_snan_f64(*f)) {
        FpFlags::NV
    } else {
        FpFlags::NONE
    }
}

/// Signaling-NaN test on raw binary32 bits.
fn is_snan_f32_bits(bits: u32) -> bool {
    let exp = (bits >> 23) & 0xFF;
    let mantissa = bits & 0x007F_FFFF;
    exp == 0xFF && mantissa != 0 && bits & 0x0040_0000 == 0
}

/// NaN-rejecting boolean comparison producing 0 or 1.
fn compare(fa: f64, fb: f64, predicate: impl Fn(f64, f64) -> bool) -> u64 {
    if fa.is_nan() || fb.is_nan() {
        0
    } else {
        predicate(fa, fb) as u64
    }
}

/// 10-bit one-hot classification of a binary64 value.
///
/// Same bit order as the single-precision classifier.
pub fn classify(fa: f64) -> u16 {
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
            if bits & F64_QUIET_BIT == 0 {
                1 << 8
            } else {
                1 << 9
            }
        }
    }
}
