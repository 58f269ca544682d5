//! Packed bfloat16 lanes.
//!
//! bfloat16 is binary32 truncated to 16 bits (8 exponent bits, 7 mantissa
//! bits). Narrowing rounds to nearest-even; NaN inputs produce a canonical
//! quiet bfloat16 NaN with the sign preserved, infinities keep their sign.
//!
//! The `fmax` lane rule here is a plain greater-than select, so a NaN in
//! either lane loses to the `b` lane. The binary16 family uses max
//! semantics instead; the difference is intentional.

use crate::common::constants::PACKED16_LANES;
use crate::core::units::formats::{lane16, set_lane16};
use crate::isa::AluOp;

/// Widens a bfloat16 value to binary32 (exact).
pub fn bf16_to_f32(h: u16) -> f32 {
    f32::from_bits((h as u32) << 16)
}

/// Narrows a binary32 value to bfloat16 with round-to-nearest-even.
///
/// NaN produces the canonical quiet NaN (sign preserved, payload forced
/// non-zero); infinity preserves its sign.
pub fn f32_to_bf16(f: f32) -> u16 {
    let bits = f.to_bits();
    if f.is_nan() {
        return ((bits >> 16) as u16 & 0x8000) | 0x7FC0;
    }
    if f.is_infinite() {
        return ((bits >> 16) as u16 & 0x8000) | 0x7F80;
    }
    let low = bits & 0xFFFF;
    let mut out = bits;
    if low > 0x8000 || (low == 0x8000 && bits & 0x1_0000 != 0) {
        out = out.wrapping_add(0x1_0000);
    }
    (out >> 16) as u16
}

/// Executes a packed bfloat16 operation over four lanes.
///
/// Each lane is widened to binary32, computed, and narrowed back.
/// Returns `0` for non-bfloat16 tags.
pub fn execute(op: AluOp, a: u64, b: u64, c: u64) -> u64 {
    let mut result = 0u64;
    for i in 0..PACKED16_LANES {
        let f1 = bf16_to_f32(lane16(a, i));
        let f2 = bf16_to_f32(lane16(b, i));
        let value = match op {
            AluOp::FAddBf16 => f1 + f2,
            AluOp::FSubBf16 => f1 - f2,
            AluOp::FMulBf16 => f1 * f2,
            // Plain greater-value select; NaN lanes lose.
            AluOp::FMaxBf16 => {
                if f1 > f2 {
                    f1
                } else {
                    f2
                }
            }
            AluOp::FMAddBf16 => f1.mul_add(f2, bf16_to_f32(lane16(c, i))),
            _ => return 0,
        };
        set_lane16(&mut result, i, f32_to_bf16(value));
    }
    result
}
