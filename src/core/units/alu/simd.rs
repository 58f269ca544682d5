//! Packed SIMD integer lanes.
//!
//! A 64-bit word packs `64 / W` independent signed lanes at widths
//! W ∈ {32, 16, 8, 4, 2}. Each lane is computed in a wider signed
//! intermediate and saturated back to its lane width before repacking.
//!
//! The two width groups use different conventions, both load-bearing:
//! - **Widths 32/16/8**: lanes are sign-extended, most-significant lane
//!   first. Divide/remainder by a zero lane yields 0 in that lane.
//! - **Widths 4/2**: lanes are masked without sign extension (values in
//!   `[0, 2^W)`), least-significant lane first. Saturation caps are +7/−8
//!   and +1/−2. The width-4 add saturates only when the raw sum exceeds 15
//!   (not 7), and a zero divisor lane yields the positive cap for divide.
//!   These quirks are intentional and must not be "fixed" silently.
//!
//! The `load_simd*` tags are placeholders: width 32 concatenates
//! `(a << 32) + sext(low32(b))`, the rest return 0. The `*_simdb` bit-lane
//! family is reserved and returns 0.

use crate::common::constants::{LANE2_MAX, LANE2_MIN, LANE4_MAX, LANE4_MIN};
use crate::isa::AluOp;

/// Lane operation kind shared by every width.
#[derive(Clone, Copy)]
enum LaneOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

/// Executes a packed SIMD operation.
///
/// # Arguments
///
/// * `op` - The operation to perform (must be a SIMD variant).
/// * `a`  - First packed operand.
/// * `b`  - Second packed operand.
///
/// # Returns
///
/// The packed 64-bit result. Returns `0` for non-SIMD tags and for the
/// reserved placeholder tags.
pub fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    match op {
        AluOp::AddSimd32 => wide(LaneOp::Add, a, b, 32),
        AluOp::SubSimd32 => wide(LaneOp::Sub, a, b, 32),
        AluOp::MulSimd32 => wide(LaneOp::Mul, a, b, 32),
        // Whole-word zero divisor short-circuits before the lane loop.
        AluOp::DivSimd32 => {
            if b == 0 {
                0
            } else {
                wide(LaneOp::Div, a, b, 32)
            }
        }
        AluOp::RemSimd32 => {
            if b == 0 {
                0
            } else {
                wide(LaneOp::Rem, a, b, 32)
            }
        }
        AluOp::LoadSimd32 => {
            // Word concatenation: high half from a, sign-extended low word
            // of b added in (wraps through the high half).
            ((a as i64) << 32).wrapping_add((b as i32) as i64) as u64
        }

        AluOp::AddSimd16 => wide(LaneOp::Add, a, b, 16),
        AluOp::SubSimd16 => wide(LaneOp::Sub, a, b, 16),
        AluOp::MulSimd16 => wide(LaneOp::Mul, a, b, 16),
        AluOp::DivSimd16 => wide(LaneOp::Div, a, b, 16),
        AluOp::RemSimd16 => wide(LaneOp::Rem, a, b, 16),

        AluOp::AddSimd8 => wide(LaneOp::Add, a, b, 8),
        AluOp::SubSimd8 => wide(LaneOp::Sub, a, b, 8),
        AluOp::MulSimd8 => wide(LaneOp::Mul, a, b, 8),
        AluOp::DivSimd8 => wide(LaneOp::Div, a, b, 8),
        AluOp::RemSimd8 => wide(LaneOp::Rem, a, b, 8),

        AluOp::AddSimd4 => small(LaneOp::Add, a, b, 4),
        AluOp::SubSimd4 => small(LaneOp::Sub, a, b, 4),
        AluOp::MulSimd4 => small(LaneOp::Mul, a, b, 4),
        AluOp::DivSimd4 => small(LaneOp::Div, a, b, 4),
        AluOp::RemSimd4 => small(LaneOp::Rem, a, b, 4),

        AluOp::AddSimd2 => small(LaneOp::Add, a, b, 2),
        AluOp::SubSimd2 => small(LaneOp::Sub, a, b, 2),
        AluOp::MulSimd2 => small(LaneOp::Mul, a, b, 2),
        AluOp::DivSimd2 => small(LaneOp::Div, a, b, 2),
        AluOp::RemSimd2 => small(LaneOp::Rem, a, b, 2),

        // Reserved placeholders.
        AluOp::LoadSimd16 | AluOp::LoadSimd8 | AluOp::LoadSimd4 | AluOp::LoadSimd2 => 0,
        AluOp::AddSimdB
        | AluOp::SubSimdB
        | AluOp::MulSimdB
        | AluOp::LoadSimdB
        | AluOp::DivSimdB
        | AluOp::RemSimdB => 0,

        _ => 0,
    }
}

/// Sign-extends the `width`-bit field of `word` starting at `shift`.
fn sext_lane(word: u64, shift: u32, width: u32) -> i64 {
    (((word >> shift) << (64 - width)) as i64) >> (64 - width)
}

/// Lane engine for widths 32/16/8: sign-extended lanes, most-significant
/// lane first, symmetric saturation, zero divisor lanes yield 0.
fn wide(op: LaneOp, a: u64, b: u64, width: u32) -> u64 {
    let count = 64 / width;
    let max = (1i64 << (width - 1)) - 1;
    let min = -(1i64 << (width - 1));
    let mask = u64::MAX >> (64 - width);

    let mut result = 0u64;
    for i in 0..count {
        let shift = 64 - width * (i + 1);
        let la = sext_lane(a, shift, width);
        let lb = sext_lane(b, shift, width);
        let value = match op {
            LaneOp::Add => la + lb,
            LaneOp::Sub => la - lb,
            LaneOp::Mul => la * lb,
            LaneOp::Div => {
                if lb == 0 {
                    0
                } else {
                    la / lb
                }
            }
            LaneOp::Rem => {
                if lb == 0 {
                    0
                } else {
                    la % lb
                }
            }
        };
        result |= ((value.clamp(min, max) as u64) & mask) << shift;
    }
    result
}

/// Lane engine for widths 4/2: masked (unsigned) lanes, least-significant
/// lane first, asymmetric caps, and the documented divisor quirks.
fn small(op: LaneOp, a: u64, b: u64, width: u32) -> u64 {
    let count = 64 / width;
    let mask = u64::MAX >> (64 - width);
    let (cap_max, cap_min) = if width == 4 {
        (LANE4_MAX, LANE4_MIN)
    } else {
        (LANE2_MAX, LANE2_MIN)
    };
    // The width-4 add tests the raw sum against the full unsigned lane
    // range, so sums of 8..=15 pass through unsaturated.
    let add_threshold = if width == 4 { 15 } else { cap_max };

    let mut result = 0u64;
    for i in 0..count {
        let shift = i * width;
        let la = ((a >> shift) & mask) as i64;
        let lb = ((b >> shift) & mask) as i64;
        let value = match op {
            LaneOp::Add => {
                let sum = la + lb;
                if sum > add_threshold {
                    cap_max
                } else if sum < cap_min {
                    cap_min
                } else {
                    sum
                }
            }
            LaneOp::Sub => (la - lb).clamp(cap_min, cap_max),
            LaneOp::Mul => (la * lb).clamp(cap_min, cap_max),
            // Zero divisor lanes saturate high for divide, clear for rem.
            LaneOp::Div => {
                if lb == 0 {
                    cap_max
                } else {
                    (la / lb).clamp(cap_min, cap_max)
                }
            }
            LaneOp::Rem => {
                if lb == 0 {
                    0
                } else {
                    (la % lb).clamp(cap_min, cap_max)
                }
            }
        };
        result |= ((value as u64) & mask) << shift;
    }
    result
}
