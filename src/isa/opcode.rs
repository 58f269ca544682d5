//! Operation tags for the execution unit.
//!
//! One flat enumeration covers every operation the unit performs. The family
//! (integer / float32 / float64) is implicit in the tag; the caller routes
//! integer-family tags through [`ExecUnit::execute`], float32-family tags
//! (including the packed 16-bit formats) through [`ExecUnit::fpexecute`],
//! and float64-family tags through [`ExecUnit::dfpexecute`].
//!
//! [`ExecUnit::execute`]: crate::core::ExecUnit::execute
//! [`ExecUnit::fpexecute`]: crate::core::ExecUnit::fpexecute
//! [`ExecUnit::dfpexecute`]: crate::core::ExecUnit::dfpexecute

/// Operation selector for all execution-unit families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// No operation. Dispatches to the unknown-opcode path (result 0).
    #[default]
    None,

    // ── Scalar integer arithmetic ──────────────────────────────────────
    /// 64-bit addition with signed-overflow detection.
    Add,
    /// 32-bit addition, sign-extended, with signed-overflow detection.
    Addw,
    /// 64-bit subtraction with signed-overflow detection.
    Sub,
    /// 32-bit subtraction, sign-extended, with signed-overflow detection.
    Subw,
    /// 64-bit multiplication (low half) with signed-overflow detection.
    Mul,
    /// High 64 bits of the signed 128-bit product.
    Mulh,
    /// High 64 bits of the signed × unsigned 128-bit product.
    Mulhsu,
    /// High 64 bits of the unsigned 128-bit product.
    Mulhu,
    /// 32-bit multiplication, sign-extended, with overflow detection.
    Mulw,
    /// 64-bit signed division.
    Div,
    /// 32-bit signed division, sign-extended.
    Divw,
    /// 64-bit unsigned division.
    Divu,
    /// 32-bit unsigned division.
    Divuw,
    /// 64-bit signed remainder.
    Rem,
    /// 32-bit signed remainder.
    Remw,
    /// 64-bit unsigned remainder.
    Remu,
    /// 32-bit unsigned remainder.
    Remuw,

    // ── Bitwise logic and comparisons ──────────────────────────────────
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Shift left logical.
    Sll,
    /// Shift left logical, 32-bit, sign-extended.
    Sllw,
    /// Shift right logical.
    Srl,
    /// Shift right logical, 32-bit, sign-extended.
    Srlw,
    /// Shift right arithmetic.
    Sra,
    /// Shift right arithmetic, 32-bit, sign-extended.
    Sraw,
    /// Set less than (signed).
    Slt,
    /// Set less than (unsigned).
    Sltu,

    // ── Packed SIMD integer lanes ──────────────────────────────────────
    /// Saturating lane addition, 2 × 32-bit lanes.
    AddSimd32,
    /// Saturating lane subtraction, 2 × 32-bit lanes.
    SubSimd32,
    /// Saturating lane multiplication, 2 × 32-bit lanes.
    MulSimd32,
    /// Word-concatenation placeholder: `(a << 32) + sext(low32(b))`.
    LoadSimd32,
    /// Saturating lane division, 2 × 32-bit lanes.
    DivSimd32,
    /// Saturating lane remainder, 2 × 32-bit lanes.
    RemSimd32,
    /// Saturating lane addition, 4 × 16-bit lanes.
    AddSimd16,
    /// Saturating lane subtraction, 4 × 16-bit lanes.
    SubSimd16,
    /// Saturating lane multiplication, 4 × 16-bit lanes.
    MulSimd16,
    /// Reserved; returns 0.
    LoadSimd16,
    /// Saturating lane division, 4 × 16-bit lanes.
    DivSimd16,
    /// Saturating lane remainder, 4 × 16-bit lanes.
    RemSimd16,
    /// Saturating lane addition, 8 × 8-bit lanes.
    AddSimd8,
    /// Saturating lane subtraction, 8 × 8-bit lanes.
    SubSimd8,
    /// Saturating lane multiplication, 8 × 8-bit lanes.
    MulSimd8,
    /// Reserved; returns 0.
    LoadSimd8,
    /// Saturating lane division, 8 × 8-bit lanes.
    DivSimd8,
    /// Saturating lane remainder, 8 × 8-bit lanes.
    RemSimd8,
    /// Saturating lane addition, 16 × 4-bit lanes (unsigned lane extraction).
    AddSimd4,
    /// Saturating lane subtraction, 16 × 4-bit lanes.
    SubSimd4,
    /// Saturating lane multiplication, 16 × 4-bit lanes.
    MulSimd4,
    /// Reserved; returns 0.
    LoadSimd4,
    /// Saturating lane division, 16 × 4-bit lanes.
    DivSimd4,
    /// Saturating lane remainder, 16 × 4-bit lanes.
    RemSimd4,
    /// Saturating lane addition, 32 × 2-bit lanes (unsigned lane extraction).
    AddSimd2,
    /// Saturating lane subtraction, 32 × 2-bit lanes.
    SubSimd2,
    /// Saturating lane multiplication, 32 × 2-bit lanes.
    MulSimd2,
    /// Reserved; returns 0.
    LoadSimd2,
    /// Saturating lane division, 32 × 2-bit lanes.
    DivSimd2,
    /// Saturating lane remainder, 32 × 2-bit lanes.
    RemSimd2,
    /// Reserved bit-SIMD family; returns 0.
    AddSimdB,
    /// Reserved; returns 0.
    SubSimdB,
    /// Reserved; returns 0.
    MulSimdB,
    /// Reserved; returns 0.
    LoadSimdB,
    /// Reserved; returns 0.
    DivSimdB,
    /// Reserved; returns 0.
    RemSimdB,

    // ── Cached lane-split operations ───────────────────────────────────
    /// Lane-split 32-bit addition through a one-entry commutative cache.
    AddCache,
    /// Lane-split 32-bit subtraction through a one-entry cache.
    SubCache,
    /// Lane-split 32-bit multiplication through a one-entry commutative cache.
    MulCache,
    /// Lane-split 32-bit division through a one-entry cache.
    DivCache,

    // ── Fault injection ────────────────────────────────────────────────
    /// Flip one uniformly random bit of `a`.
    RandomFlip,

    // ── ECC (Hamming 64,57 SECDED) ─────────────────────────────────────
    /// Decode a codeword and return the 57-bit payload.
    EccCheck,
    /// Decode both operands, add payloads, re-encode.
    EccAdd,
    /// Decode both operands, subtract payloads, re-encode.
    EccSub,
    /// Decode both operands, multiply payloads, re-encode.
    EccMul,
    /// Decode both operands, divide payloads, re-encode.
    EccDiv,

    // ── Quantum amplitude engine ───────────────────────────────────────
    /// Copy `a`'s amplitude, taking the tag from `b` when `b` is non-zero.
    QAllocA,
    /// Same as [`AluOp::QAllocA`] (allocation slot B).
    QAllocB,
    /// Hadamard-like sum: `(a + b) / √2` per component.
    QHa,
    /// Hadamard-like difference: `(a − b) / √2` per component.
    QHb,
    /// Rotate `a` by the angle carried in `b`'s imaginary part.
    QPhase,
    /// Swap half: returns `b`.
    QXa,
    /// Swap half: returns `a`.
    QXb,
    /// Probabilistic measurement collapse to 0 or 1.
    QMeas,
    /// Normalize the pair, returning `a`'s normalized amplitude.
    QNormA,
    /// Normalize the pair, returning `b`'s normalized amplitude.
    QNormB,

    // ── Float32 engine ─────────────────────────────────────────────────
    /// Fused multiply-add, single: `a·b + c`.
    FMAddS,
    /// Fused multiply-subtract, single: `a·b − c`.
    FMSubS,
    /// Negated fused multiply-add, single: `−(a·b) − c`.
    FNMAddS,
    /// Negated fused multiply-subtract, single: `−(a·b) + c`.
    FNMSubS,
    /// Addition, single.
    FAddS,
    /// Subtraction, single.
    FSubS,
    /// Multiplication, single.
    FMulS,
    /// Division, single. Division by ±0 yields NaN and raises div-by-zero.
    FDivS,
    /// Square root, single. Negative input yields NaN and raises invalid.
    FSqrtS,
    /// Sign injection: magnitude of `a`, sign of `b`.
    FSgnjS,
    /// Sign injection: magnitude of `a`, negated sign of `b`.
    FSgnjnS,
    /// Sign injection: magnitude of `a`, sign of `a` XOR sign of `b`.
    FSgnjxS,
    /// NaN-aware minimum, single.
    FMinS,
    /// NaN-aware maximum, single.
    FMaxS,
    /// Equality comparison, single. NaN yields 0.
    FEqS,
    /// Less-than comparison, single. NaN yields 0.
    FLtS,
    /// Less-or-equal comparison, single. NaN yields 0.
    FLeS,
    /// 10-bit one-hot classification, single.
    FClassS,
    /// Convert single to signed 32-bit integer, saturating.
    FCvtWS,
    /// Convert single to unsigned 32-bit integer, saturating.
    FCvtWuS,
    /// Convert single to signed 64-bit integer, saturating.
    FCvtLS,
    /// Convert single to unsigned 64-bit integer, saturating.
    FCvtLuS,
    /// Convert signed 32-bit integer to single.
    FCvtSW,
    /// Convert unsigned 32-bit integer to single.
    FCvtSWu,
    /// Convert signed 64-bit integer to single.
    FCvtSL,
    /// Convert unsigned 64-bit integer to single.
    FCvtSLu,
    /// Move single bits to the integer domain, sign-extended.
    FMvXW,
    /// Move integer bits to the single domain.
    FMvWX,

    // ── Float64 engine ─────────────────────────────────────────────────
    /// Fused multiply-add, double.
    FMAddD,
    /// Fused multiply-subtract, double.
    FMSubD,
    /// Negated fused multiply-add, double.
    FNMAddD,
    /// Negated fused multiply-subtract, double.
    FNMSubD,
    /// Addition, double.
    FAddD,
    /// Subtraction, double.
    FSubD,
    /// Multiplication, double.
    FMulD,
    /// Division, double. Division by ±0 yields NaN and raises div-by-zero.
    FDivD,
    /// Square root, double. Negative input yields NaN and raises invalid.
    FSqrtD,
    /// Sign injection, double.
    FSgnjD,
    /// Negated sign injection, double.
    FSgnjnD,
    /// XOR sign injection, double.
    FSgnjxD,
    /// NaN-aware minimum, double.
    FMinD,
    /// NaN-aware maximum, double.
    FMaxD,
    /// Equality comparison, double.
    FEqD,
    /// Less-than comparison, double.
    FLtD,
    /// Less-or-equal comparison, double.
    FLeD,
    /// 10-bit one-hot classification, double.
    FClassD,
    /// Convert double to signed 32-bit integer, saturating.
    FCvtWD,
    /// Convert double to unsigned 32-bit integer, saturating.
    FCvtWuD,
    /// Convert double to signed 64-bit integer, saturating.
    FCvtLD,
    /// Convert double to unsigned 64-bit integer, saturating.
    FCvtLuD,
    /// Convert signed 32-bit integer to double.
    FCvtDW,
    /// Convert unsigned 32-bit integer to double.
    FCvtDWu,
    /// Convert signed 64-bit integer to double.
    FCvtDL,
    /// Convert unsigned 64-bit integer to double.
    FCvtDLu,
    /// Convert double to single (bits of the result in the low 32).
    FCvtSD,
    /// Convert single (low 32 bits of `a`) to double.
    FCvtDS,
    /// Move integer bits to the double domain (identity).
    FMvDX,
    /// Move double bits to the integer domain (identity).
    FMvXD,

    // ── Packed bfloat16 (4 × 16-bit lanes) ─────────────────────────────
    /// Lane-wise addition, bfloat16.
    FAddBf16,
    /// Lane-wise subtraction, bfloat16.
    FSubBf16,
    /// Lane-wise multiplication, bfloat16.
    FMulBf16,
    /// Lane-wise greater-value select, bfloat16.
    FMaxBf16,
    /// Lane-wise fused multiply-add, bfloat16.
    FMAddBf16,

    // ── Packed binary16 (4 × 16-bit lanes) ─────────────────────────────
    /// Lane-wise addition, binary16.
    FAddFp16,
    /// Lane-wise subtraction, binary16.
    FSubFp16,
    /// Lane-wise multiplication, binary16.
    FMulFp16,
    /// Lane-wise maximum, binary16.
    FMaxFp16,
    /// Lane-wise fused multiply-add, binary16.
    FMAddFp16,
    /// 4-lane dot product, broadcast to every result lane.
    FDotFp16,

    // ── Packed microscaling (4 × 14-bit lanes, shared exponent) ────────
    /// Lane-wise addition, microscaling.
    FAddMsfp16,
    /// Lane-wise subtraction, microscaling.
    FSubMsfp16,
    /// Lane-wise multiplication, microscaling.
    FMulMsfp16,
    /// Lane-wise maximum, microscaling.
    FMaxMsfp16,
    /// Lane-wise fused multiply-add, microscaling.
    FMAddMsfp16,
}
