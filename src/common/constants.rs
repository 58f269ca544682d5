//! Lane geometry and saturation constants for the packed integer families.
//!
//! A 64-bit word packs `64 / W` lanes of width `W`. Widths 32, 16, and 8
//! order lanes most-significant first and sign-extend each lane before
//! arithmetic; widths 4 and 2 order lanes least-significant first and mask
//! without sign extension. Both conventions are load-bearing and must not
//! be unified.

/// Saturation cap (positive) for 4-bit lanes.
pub const LANE4_MAX: i64 = 7;

/// Saturation cap (negative) for 4-bit lanes.
pub const LANE4_MIN: i64 = -8;

/// Saturation cap (positive) for 2-bit lanes.
pub const LANE2_MAX: i64 = 1;

/// Saturation cap (negative) for 2-bit lanes.
pub const LANE2_MIN: i64 = -2;

/// Shift-amount mask for 64-bit shifts (6 bits: 0-63).
pub const SHAMT_MASK_64: u64 = 0x3F;

/// Shift-amount mask for 32-bit "w" shifts (5 bits: 0-31).
pub const SHAMT_MASK_32: u32 = 0x1F;

/// Number of lanes in every 16-bit packed float format (bf16, fp16).
pub const PACKED16_LANES: usize = 4;
