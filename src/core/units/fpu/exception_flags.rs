//! Floating-point exception (accrued) flags.
//!
//! The unit reports five sticky IEEE exception flags per operation:
//!
//! | Bit | Flag | Description         |
//! |-----|------|---------------------|
//! |  0  | NV   | Invalid Operation   |
//! |  1  | DZ   | Divide by Zero      |
//! |  2  | OF   | Overflow            |
//! |  3  | UF   | Underflow           |
//! |  4  | NX   | Inexact             |
//!
//! Flags accumulate within an operation (a flag is set if any sub-step
//! raised it) and are never cleared by the unit; clearing is the caller's
//! concern.

use std::ops::{BitOr, BitOrAssign};

/// Floating-point exception flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FpFlags(u8);

impl FpFlags {
    /// No exceptions raised.
    pub const NONE: Self = Self(0);
    /// Invalid Operation.
    pub const NV: Self = Self(1 << 0);
    /// Divide by Zero.
    pub const DZ: Self = Self(1 << 1);
    /// Overflow.
    pub const OF: Self = Self(1 << 2);
    /// Underflow.
    pub const UF: Self = Self(1 << 3);
    /// Inexact.
    pub const NX: Self = Self(1 << 4);

    /// Returns the raw 5-bit flag value.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no flags are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every flag in `other` is set.
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl BitOr for FpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FpFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
