//! binary64 engine tests.
//!
//! The double entry point collapses the flag set to a single
//! any-exception bool, so flag assertions here are coarser than the
//! single-precision suite.

use nexu::{AluOp, ExecUnit};

/// Canonical quiet NaN bits for binary64.
const QNAN: u64 = 0x7FF8_0000_0000_0000;

const RNE: u8 = 0b000;

fn dfp(op: AluOp, a: u64, b: u64) -> (u64, bool) {
    ExecUnit::default().dfpexecute(op, a, b, 0, RNE)
}

fn dfp3(op: AluOp, a: u64, b: u64, c: u64) -> (u64, bool) {
    ExecUnit::default().dfpexecute(op, a, b, c, RNE)
}

fn bits(f: f64) -> u64 {
    f.to_bits()
}

// ═════════════════════════════════════════════════════════════════════════════
//  Arithmetic
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn fadd_d_basic() {
    assert_eq!(dfp(AluOp::FAddD, bits(1.5), bits(2.5)), (bits(4.0), false));
}

#[test]
fn fsub_fmul_basic() {
    assert_eq!(dfp(AluOp::FSubD, bits(5.0), bits(3.0)).0, bits(2.0));
    assert_eq!(dfp(AluOp::FMulD, bits(2.0), bits(3.5)).0, bits(7.0));
}

#[test]
fn fdiv_d_by_zero_returns_qnan_and_flags() {
    assert_eq!(dfp(AluOp::FDivD, bits(1.0), bits(0.0)), (QNAN, true));
}

#[test]
fn fsqrt_d_negative_flags() {
    assert_eq!(dfp(AluOp::FSqrtD, bits(-4.0), 0), (QNAN, true));
    assert_eq!(dfp(AluOp::FSqrtD, bits(4.0), 0), (bits(2.0), false));
}

#[test]
fn fmul_d_overflow_flags() {
    let (result, raised) = dfp(AluOp::FMulD, bits(f64::MAX), bits(f64::MAX));
    assert_eq!(result, bits(f64::INFINITY));
    assert!(raised);
}

#[test]
fn fma_d_variants() {
    let (a, b, c) = (bits(2.0), bits(3.0), bits(1.0));
    assert_eq!(dfp3(AluOp::FMAddD, a, b, c).0, bits(7.0));
    assert_eq!(dfp3(AluOp::FMSubD, a, b, c).0, bits(5.0));
    assert_eq!(dfp3(AluOp::FNMAddD, a, b, c).0, bits(-7.0));
    assert_eq!(dfp3(AluOp::FNMSubD, a, b, c).0, bits(-5.0));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Sign injection, min/max, comparisons
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn sign_injection_d() {
    assert_eq!(dfp(AluOp::FSgnjD, bits(1.5), bits(-2.0)).0, bits(-1.5));
    assert_eq!(dfp(AluOp::FSgnjnD, bits(1.5), bits(-2.0)).0, bits(1.5));
    assert_eq!(dfp(AluOp::FSgnjxD, bits(-1.5), bits(-2.0)).0, bits(1.5));
}

#[test]
fn min_max_d_nan_rules() {
    assert_eq!(dfp(AluOp::FMinD, QNAN, bits(2.0)).0, bits(2.0));
    assert_eq!(dfp(AluOp::FMaxD, QNAN, QNAN).0, QNAN);
    assert_eq!(dfp(AluOp::FMinD, bits(0.0), bits(-0.0)).0, bits(-0.0));
}

#[test]
fn comparisons_d() {
    assert_eq!(dfp(AluOp::FEqD, bits(2.0), bits(2.0)).0, 1);
    assert_eq!(dfp(AluOp::FLtD, bits(3.0), bits(2.0)).0, 0);
    assert_eq!(dfp(AluOp::FLeD, QNAN, bits(2.0)).0, 0);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Classification
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn fclass_d_specials() {
    let class = |v: u64| dfp(AluOp::FClassD, v, 0).0;
    assert_eq!(class(bits(f64::NEG_INFINITY)), 1 << 0);
    assert_eq!(class(bits(-1.5)), 1 << 1);
    assert_eq!(class(0x8000_0000_0000_0001), 1 << 2);
    assert_eq!(class(bits(-0.0)), 1 << 3);
    assert_eq!(class(bits(0.0)), 1 << 4);
    assert_eq!(class(0x0000_0000_0000_0001), 1 << 5);
    assert_eq!(class(bits(1.5)), 1 << 6);
    assert_eq!(class(bits(f64::INFINITY)), 1 << 7);
    assert_eq!(class(0x7FF0_0000_0000_0001), 1 << 8);
    assert_eq!(class(QNAN), 1 << 9);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Conversions
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn fcvt_w_d_basic() {
    assert_eq!(dfp(AluOp::FCvtWD, bits(100.5), 0), (100, false));
    assert_eq!(dfp(AluOp::FCvtWD, bits(-100.5), 0), (-100i64 as u64, false));
}

/// NaN saturates HIGH for the double-precision signed word conversion,
/// the opposite of the single-precision engine.
#[test]
fn fcvt_w_d_nan_saturates_high() {
    assert_eq!(dfp(AluOp::FCvtWD, QNAN, 0), (i32::MAX as i64 as u64, true));
}

#[test]
fn fcvt_wu_d_negative_saturates_to_zero() {
    assert_eq!(dfp(AluOp::FCvtWuD, bits(-3.0), 0), (0, true));
}

#[test]
fn fcvt_l_d_wide() {
    assert_eq!(dfp(AluOp::FCvtLD, bits(1.0e15), 0), (1_000_000_000_000_000, false));
}

#[test]
fn fcvt_lu_d_saturates_above_range() {
    assert_eq!(dfp(AluOp::FCvtLuD, bits(2.0e19 * 2.0), 0), (u64::MAX, true));
}

#[test]
fn fcvt_d_w_is_exact() {
    assert_eq!(dfp(AluOp::FCvtDW, -7i64 as u64, 0), (bits(-7.0), false));
    assert_eq!(dfp(AluOp::FCvtDWu, 0xFFFF_FFFF, 0), (bits(4294967295.0), false));
}

#[test]
fn fcvt_d_l_flags_inexact_large_values() {
    // 2⁵³ + 1 is not representable in binary64.
    let value = (1u64 << 53) + 1;
    let (result, raised) = dfp(AluOp::FCvtDL, value, 0);
    assert_eq!(result, bits((1u64 << 53) as f64));
    assert!(raised);
    // Small values convert exactly.
    assert_eq!(dfp(AluOp::FCvtDL, 42, 0), (bits(42.0), false));
}

// ═════════════════════════════════════════════════════════════════════════════
//  Bridges to binary32 and bit moves
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn fcvt_d_s_widens_low_word() {
    let single = 1.5f32.to_bits() as u64;
    assert_eq!(dfp(AluOp::FCvtDS, single, 0), (bits(1.5), false));
}

#[test]
fn fcvt_s_d_narrows_to_low_word() {
    assert_eq!(dfp(AluOp::FCvtSD, bits(1.5), 0), (1.5f32.to_bits() as u64, false));
}

#[test]
fn fcvt_s_d_overflow_to_infinity_flags() {
    let (result, raised) = dfp(AluOp::FCvtSD, bits(1.0e300), 0);
    assert_eq!(result, f32::INFINITY.to_bits() as u64);
    assert!(raised);
}

#[test]
fn fmv_d_moves_are_identity() {
    assert_eq!(dfp(AluOp::FMvDX, 0x0123_4567_89AB_CDEF, 0).0, 0x0123_4567_89AB_CDEF);
    assert_eq!(dfp(AluOp::FMvXD, bits(-2.5), 0).0, bits(-2.5));
}
