//! Fixed-point complex amplitude engine.
//!
//! An amplitude register packs a 4-bit tag (bits 60..64), a Q29 real part
//! (bits 30..60), and a Q29 imaginary part (bits 0..30). Q29 is a 30-bit
//! two's-complement fixed-point value with LSB = 2⁻²⁹; values saturate to
//! `[-2²⁹, 2²⁹ - 1]` before packing.
//!
//! The operations model a two-amplitude register pair: Hadamard-like
//! sum/difference, phase rotation, swap, probabilistic measurement, and
//! normalization. A tag of 1 gates small uniform noise on the rotation and
//! Hadamard results, drawn from the unit's pseudo-random stream.

use crate::common::Xorshift64;
use crate::isa::AluOp;

/// Fixed-point scale factor (2²⁹).
const SCALE: i64 = 1 << 29;

/// Reciprocal of the scale factor.
const SCALE_INV: f64 = 1.0 / SCALE as f64;

/// Mask selecting a 30-bit Q29 field.
const FIELD_MASK: u64 = 0x3FFF_FFFF;

/// Largest representable Q29 value.
const Q29_MAX: i64 = SCALE - 1;

/// Smallest representable Q29 value.
const Q29_MIN: i64 = -SCALE;

/// 1/√2, the Hadamard normalization factor.
const SQRT_2_INV: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Joint-probability floor below which measurement and normalization
/// degenerate (returns 0 / the unnormalized operand).
const NORM_EPSILON: f64 = 1e-9;

/// Half-width of the uniform noise applied when the tag nibble is 1.
const NOISE_AMPLITUDE: f64 = 0.01;

/// Extracts the 4-bit tag.
pub fn tag(register: u64) -> u8 {
    ((register >> 60) & 0xF) as u8
}

/// Decodes the Q29 real part.
pub fn real(register: u64) -> f64 {
    fixed_to_double(((register >> 30) & FIELD_MASK) as i64)
}

/// Decodes the Q29 imaginary part.
pub fn imag(register: u64) -> f64 {
    fixed_to_double((register & FIELD_MASK) as i64)
}

/// Packs a tag and two components into an amplitude register.
///
/// Both components saturate to the Q29 range and round to nearest.
pub fn pack_amplitude(tag: u8, real: f64, imag: f64) -> u64 {
    let fixed_r = double_to_fixed(real);
    let fixed_i = double_to_fixed(imag);
    ((tag as u64 & 0xF) << 60) | ((fixed_r as u64 & FIELD_MASK) << 30) | (fixed_i as u64 & FIELD_MASK)
}

/// Sign-extends a 30-bit field and converts to a double.
fn fixed_to_double(mut fixed: i64) -> f64 {
    if fixed & (1 << 29) != 0 {
        fixed |= !(FIELD_MASK as i64);
    }
    fixed as f64 * SCALE_INV
}

/// Converts a double to saturating Q29 fixed point.
fn double_to_fixed(value: f64) -> i64 {
    let scaled = value * SCALE as f64;
    if scaled > Q29_MAX as f64 {
        Q29_MAX
    } else if scaled < Q29_MIN as f64 {
        Q29_MIN
    } else {
        scaled.round() as i64
    }
}

/// Squared norm of a complex value.
fn norm_squared(real: f64, imag: f64) -> f64 {
    real * real + imag * imag
}

/// Uniform noise in `[-NOISE_AMPLITUDE, +NOISE_AMPLITUDE]`.
fn apply_noise(value: f64, rng: &mut Xorshift64) -> f64 {
    value + rng.next_f64() * (2.0 * NOISE_AMPLITUDE) - NOISE_AMPLITUDE
}

/// Executes a quantum amplitude opcode.
///
/// # Arguments
///
/// * `op`  - The operation to perform (must be a quantum variant).
/// * `a`   - First amplitude register.
/// * `b`   - Second amplitude register (or angle carrier for `QPhase`).
/// * `rng` - The unit's pseudo-random stream.
///
/// # Returns
///
/// The result register. Returns `0` for non-quantum tags.
pub fn execute(op: AluOp, a: u64, b: u64, rng: &mut Xorshift64) -> u64 {
    match op {
        // Both allocation slots copy a's amplitude, adopting b's tag when
        // b carries one.
        AluOp::QAllocA | AluOp::QAllocB => {
            let t = if b != 0 { tag(b) } else { tag(a) };
            pack_amplitude(t, real(a), imag(a))
        }
        AluOp::QHa => hadamard(a, b, 1.0, rng),
        AluOp::QHb => hadamard(a, b, -1.0, rng),
        AluOp::QPhase => {
            let t = tag(a);
            let (re, im) = (real(a), imag(a));
            let theta = imag(b);
            let (sin_t, cos_t) = theta.sin_cos();
            let mut res_r = re * cos_t - im * sin_t;
            let mut res_i = re * sin_t + im * cos_t;
            if t == 0x1 {
                res_r = apply_noise(res_r, rng);
                res_i = apply_noise(res_i, rng);
            }
            pack_amplitude(t, res_r, res_i)
        }
        AluOp::QXa => b,
        AluOp::QXb => a,
        AluOp::QMeas => {
            let p0 = norm_squared(real(a), imag(a));
            let p1 = norm_squared(real(b), imag(b));
            let total = p0 + p1;
            if total < NORM_EPSILON {
                return 0;
            }
            if rng.next_f64() < p0 / total {
                0
            } else {
                1
            }
        }
        AluOp::QNormA => normalize(a, b, a),
        AluOp::QNormB => normalize(a, b, b),
        _ => 0,
    }
}

/// Hadamard-like combine: `(a ± b) / √2` per component, with tag-gated
/// noise. The sign selects the sum (+1) or difference (−1) form.
fn hadamard(a: u64, b: u64, sign: f64, rng: &mut Xorshift64) -> u64 {
    let t = tag(a);
    let mut res_r = (real(a) + sign * real(b)) * SQRT_2_INV;
    let mut res_i = (imag(a) + sign * imag(b)) * SQRT_2_INV;
    if t == 0x1 {
        res_r = apply_noise(res_r, rng);
        res_i = apply_noise(res_i, rng);
    }
    pack_amplitude(t, res_r, res_i)
}

/// Normalizes the `(a, b)` pair and returns `which`'s normalized
/// amplitude, or `which` unchanged when the joint norm is degenerate.
fn normalize(a: u64, b: u64, which: u64) -> u64 {
    let norm_sq = norm_squared(real(a), imag(a)) + norm_squared(real(b), imag(b));
    if norm_sq < NORM_EPSILON {
        return which;
    }
    let norm = norm_sq.sqrt();
    pack_amplitude(tag(which), real(which) / norm, imag(which) / norm)
}
