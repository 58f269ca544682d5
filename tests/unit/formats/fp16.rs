//! Packed binary16 tests.

use crate::common::TestRng;
use nexu::core::units::formats::fp16::{f32_to_fp16, fp16_to_f32};
use nexu::{AluOp, ExecUnit};

const RNE: u8 = 0b000;

fn packed(op: AluOp, a: u64, b: u64, c: u64) -> u64 {
    ExecUnit::default().fpexecute(op, a, b, c, RNE).0
}

fn splat(h: u16) -> u64 {
    let lane = h as u64;
    lane | lane << 16 | lane << 32 | lane << 48
}

// ═════════════════════════════════════════════════════════════════════════════
//  Conversion
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn simple_values() {
    assert_eq!(f32_to_fp16(1.0), 0x3C00);
    assert_eq!(f32_to_fp16(-2.0), 0xC000);
    assert_eq!(f32_to_fp16(0.5), 0x3800);
    assert_eq!(fp16_to_f32(0x3C00), 1.0);
    assert_eq!(fp16_to_f32(0x4400), 4.0);
}

#[test]
fn max_finite_and_overflow() {
    // 65504 is the largest binary16 normal.
    assert_eq!(fp16_to_f32(0x7BFF), 65504.0);
    assert_eq!(f32_to_fp16(65504.0), 0x7BFF);
    // Halfway to the next step rounds up to infinity.
    assert_eq!(f32_to_fp16(65520.0), 0x7C00);
    assert_eq!(f32_to_fp16(1.0e10), 0x7C00);
}

#[test]
fn subnormals_round_trip() {
    // Smallest subnormal 2⁻²⁴ and largest subnormal (1023/1024)·2⁻¹⁴.
    assert_eq!(f32_to_fp16(fp16_to_f32(0x0001)), 0x0001);
    assert_eq!(f32_to_fp16(fp16_to_f32(0x03FF)), 0x03FF);
    assert_eq!(fp16_to_f32(0x0001), 2.0f32.powi(-24));
}

#[test]
fn subnormal_rounding_promotes_to_normal() {
    // Just below the smallest normal rounds up into it.
    let below_normal = 2.0f32.powi(-14) - 2.0f32.powi(-26);
    assert_eq!(f32_to_fp16(below_normal), 0x0400);
}

#[test]
fn tiny_values_flush_to_signed_zero() {
    assert_eq!(f32_to_fp16(1.0e-12), 0x0000);
    assert_eq!(f32_to_fp16(-1.0e-12), 0x8000);
}

#[test]
fn nan_keeps_payload_and_never_collapses_to_infinity() {
    let nan = f32_to_fp16(f32::NAN);
    assert_eq!(nan & 0x7C00, 0x7C00);
    assert_ne!(nan & 0x03FF, 0);
    assert!(fp16_to_f32(0x7C01).is_nan());
    assert_eq!(f32_to_fp16(f32::INFINITY), 0x7C00);
}

#[test]
fn infinity_round_trips() {
    assert_eq!(fp16_to_f32(0x7C00), f32::INFINITY);
    assert_eq!(fp16_to_f32(0xFC00), f32::NEG_INFINITY);
}

/// Round trip within one binary16 ULP for the normal range.
#[test]
fn round_trip_within_one_ulp() {
    let mut rng = TestRng::new(0xF160_0001);
    for _ in 0..5000 {
        let word = rng.next_u64() as u32;
        // Exponents 113..=140 keep the value inside half's normal range.
        let exponent = 113 + (word >> 23) % 28;
        let bits = (word & 0x807F_FFFF) | (exponent << 23);
        let x = f32::from_bits(bits);
        let back = fp16_to_f32(f32_to_fp16(x));
        let error = ((back - x) / x).abs();
        assert!(error <= 1.0 / 1024.0, "x={x:e} back={back:e}");
    }
}

// ═════════════════════════════════════════════════════════════════════════════
//  Packed lanes
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn lanes_operate_independently() {
    let ones = splat(0x3C00);
    let twos = splat(0x4000);
    assert_eq!(packed(AluOp::FAddFp16, ones, ones, 0), twos);
    assert_eq!(packed(AluOp::FMulFp16, twos, twos, 0), splat(0x4400));
    assert_eq!(packed(AluOp::FSubFp16, twos, ones, 0), ones);
}

#[test]
fn fmadd_lanes() {
    // 2 * 3 + 1 = 7.0 (0x4700).
    assert_eq!(
        packed(AluOp::FMAddFp16, splat(0x4000), splat(0x4200), splat(0x3C00)),
        splat(0x4700)
    );
}

/// The binary16 max uses max semantics: a NaN lane yields the other
/// operand, unlike the bfloat16 family.
#[test]
fn fmax_nan_lane_yields_other() {
    let nan = splat(0x7E00);
    let ones = splat(0x3C00);
    assert_eq!(packed(AluOp::FMaxFp16, nan, ones, 0), ones);
    assert_eq!(packed(AluOp::FMaxFp16, ones, nan, 0), ones);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Dot product
// ═════════════════════════════════════════════════════════════════════════════

/// Four lanes of 1.0 · 1.0 accumulate to 4.0 broadcast everywhere.
#[test]
fn fdot_broadcasts_accumulated_product() {
    let ones = splat(0x3C00);
    assert_eq!(packed(AluOp::FDotFp16, ones, ones, 0), splat(0x4400));
}

#[test]
fn fdot_mixed_signs() {
    // Lanes: 1.0, 2.0, -1.0, 1.0 against all-ones → 1 + 2 - 1 + 1 = 3.
    let a: u64 = 0x3C00_BC00_4000_3C00;
    let ones = splat(0x3C00);
    assert_eq!(packed(AluOp::FDotFp16, a, ones, 0), splat(0x4200));
}

#[test]
fn fdot_zero_operand() {
    assert_eq!(packed(AluOp::FDotFp16, splat(0x3C00), 0, 0), 0);
}
