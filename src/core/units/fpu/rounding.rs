//! Rounding mode decoding and software rounding.
//!
//! The unit accepts a 3-bit rounding-mode hint with each float operation:
//!
//! | Value | Mode | Description             |
//! |-------|------|-------------------------|
//! | 0b000 | RNE  | Round to Nearest, even  |
//! | 0b001 | RTZ  | Round towards Zero      |
//! | 0b010 | RDN  | Round Down (towards −∞) |
//! | 0b011 | RUP  | Round Up (towards +∞)   |
//!
//! Other encodings leave the rounding behavior at the default (RNE).
//!
//! There is no host floating-point environment to install or restore:
//! rounding is emulated in software. Single-precision arithmetic is
//! evaluated in f64 (exact for add/sub/mul of f32 operands) and then
//! correctly rounded to f32 in the requested mode by nudging the
//! nearest-even narrowing one ULP when it landed on the wrong side.
//! Float→integer conversions apply the mode directly.

/// Rounding mode selected by the 3-bit hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    Rne = 0b000,
    /// Round towards Zero.
    Rtz = 0b001,
    /// Round Down (towards −∞).
    Rdn = 0b010,
    /// Round Up (towards +∞).
    Rup = 0b011,
}

impl RoundingMode {
    /// Decodes the 3-bit rounding-mode field.
    ///
    /// Returns `None` for encodings the unit leaves at the default
    /// (0b100 and above).
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::Rne),
            0b001 => Some(Self::Rtz),
            0b010 => Some(Self::Rdn),
            0b011 => Some(Self::Rup),
            _ => None,
        }
    }
}

/// Next f32 towards zero. Must not be called with a zero argument.
fn toward_zero(f: f32) -> f32 {
    f32::from_bits(f.to_bits() - 1)
}

/// Next f32 towards −∞.
fn next_down(f: f32) -> f32 {
    if f > 0.0 {
        f32::from_bits(f.to_bits() - 1)
    } else if f == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(f.to_bits() + 1)
    }
}

/// Next f32 towards +∞.
fn next_up(f: f32) -> f32 {
    if f < 0.0 {
        f32::from_bits(f.to_bits() - 1)
    } else if f == 0.0 {
        f32::from_bits(1)
    } else {
        f32::from_bits(f.to_bits() + 1)
    }
}

/// Narrows an exactly-known f64 value to f32 in the requested mode.
///
/// The nearest-even narrowing (`as f32`) is computed first; when the
/// requested mode demands the other neighbour, the result is stepped one
/// ULP in the required direction. Overflow behaves per IEEE 754: RTZ and
/// the inward directed mode clamp to the largest finite value, the
/// outward modes produce the infinity (stepping one ULP down from an
/// infinity yields `f32::MAX`).
pub fn round_f64_to_f32(exact: f64, rm: RoundingMode) -> f32 {
    let rne = exact as f32;
    if exact.is_nan() || rne as f64 == exact {
        return rne;
    }
    match rm {
        RoundingMode::Rne => rne,
        RoundingMode::Rtz => {
            if (rne as f64).abs() > exact.abs() {
                toward_zero(rne)
            } else {
                rne
            }
        }
        RoundingMode::Rdn => {
            if rne as f64 > exact {
                next_down(rne)
            } else {
                rne
            }
        }
        RoundingMode::Rup => {
            if (rne as f64) < exact {
                next_up(rne)
            } else {
                rne
            }
        }
    }
}

/// Rounds an f32 to an integral value in the requested mode.
pub fn round_to_integral_f32(value: f32, rm: RoundingMode) -> f32 {
    match rm {
        RoundingMode::Rne => value.round_ties_even(),
        RoundingMode::Rtz => value.trunc(),
        RoundingMode::Rdn => value.floor(),
        RoundingMode::Rup => value.ceil(),
    }
}

/// Rounds an f64 to an integral value in the requested mode.
pub fn round_to_integral_f64(value: f64, rm: RoundingMode) -> f64 {
    match rm {
        RoundingMode::Rne => value.round_ties_even(),
        RoundingMode::Rtz => value.trunc(),
        RoundingMode::Rdn => value.floor(),
        RoundingMode::Rup => value.ceil(),
    }
}
