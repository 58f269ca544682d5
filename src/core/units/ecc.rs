//! Hamming(64,57) SECDED engine.
//!
//! A 64-bit codeword carries 57 data bits with 7 check bits: six Hamming
//! parities at the power-of-two positions 1, 2, 4, 8, 16, 32 and one
//! overall parity at position 0, giving single-error correction and
//! double-error detection.
//!
//! The arithmetic opcodes decode both operand codewords, operate on the
//! 57-bit payloads, and re-encode the result. Decode status (corrected /
//! uncorrectable) is computed for every operand; the dispatcher exposes
//! only the data word, so callers that need the status use [`decode`]
//! directly.

use crate::isa::AluOp;

/// Number of payload bits per codeword.
pub const DATA_BITS: u32 = 57;

/// Mask selecting a 57-bit payload.
pub const DATA_MASK: u64 = (1u64 << DATA_BITS) - 1;

/// Outcome of a codeword decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EccStatus {
    /// A single-bit error was detected and corrected.
    pub corrected: bool,
    /// A double-bit error was detected; the payload is unreliable.
    pub uncorrectable: bool,
}

/// Returns true if `position` holds a check bit (0 or a power of two).
fn is_check_position(position: u32) -> bool {
    position == 0 || position.is_power_of_two()
}

/// Encodes a 57-bit payload into a 64-bit SECDED codeword.
///
/// Payload bits fill the non-check positions in ascending order. Each
/// Hamming parity covers the positions whose index has the corresponding
/// bit set; the overall parity makes the whole word even.
///
/// # Arguments
///
/// * `data` - The payload; bits above 57 are ignored.
pub fn encode(data: u64) -> u64 {
    let data = data & DATA_MASK;
    let mut code = 0u64;

    let mut bit = 0;
    for position in 1..64 {
        if is_check_position(position) {
            continue;
        }
        if (data >> bit) & 1 != 0 {
            code |= 1u64 << position;
        }
        bit += 1;
    }

    for i in 0..6 {
        let group = 1u32 << i;
        let mut parity = 0u64;
        for position in 1..64 {
            if position & group != 0 {
                parity ^= (code >> position) & 1;
            }
        }
        if parity != 0 {
            code |= 1u64 << group;
        }
    }

    // Overall parity over positions 1..63, stored at position 0.
    let overall = (code.count_ones() & 1) as u64;
    code | overall
}

/// Decodes a 64-bit SECDED codeword into its 57-bit payload.
///
/// The syndrome is the XOR of the set-bit positions; the overall parity
/// distinguishes single errors (odd parity, correctable) from double
/// errors (even parity with a non-zero syndrome, uncorrectable).
///
/// # Returns
///
/// The extracted payload and the decode status. The payload is extracted
/// even when the codeword is uncorrectable.
pub fn decode(code: u64) -> (u64, EccStatus) {
    let mut syndrome = 0u32;
    for position in 1..64 {
        if (code >> position) & 1 != 0 {
            syndrome ^= position;
        }
    }
    let parity_dirty = code.count_ones() & 1 != 0;

    let mut status = EccStatus::default();
    let mut corrected_code = code;
    if parity_dirty {
        // Single-bit error; a zero syndrome means the overall parity bit
        // itself flipped, which leaves the payload untouched.
        corrected_code ^= 1u64 << syndrome;
        status.corrected = true;
    } else if syndrome != 0 {
        status.uncorrectable = true;
    }

    let mut data = 0u64;
    let mut bit = 0;
    for position in 1..64 {
        if is_check_position(position) {
            continue;
        }
        if (corrected_code >> position) & 1 != 0 {
            data |= 1u64 << bit;
        }
        bit += 1;
    }
    (data, status)
}

/// Executes an ECC opcode: decode, operate on payloads, re-encode.
///
/// `EccCheck` returns the decoded payload without re-encoding. Division by
/// a zero payload yields a zero payload.
pub fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    let (da, _) = decode(a);
    match op {
        AluOp::EccCheck => da,
        AluOp::EccAdd => {
            let (db, _) = decode(b);
            encode(da.wrapping_add(db))
        }
        AluOp::EccSub => {
            let (db, _) = decode(b);
            encode(da.wrapping_sub(db))
        }
        AluOp::EccMul => {
            let (db, _) = decode(b);
            encode(da.wrapping_mul(db))
        }
        AluOp::EccDiv => {
            let (db, _) = decode(b);
            encode(if db == 0 { 0 } else { da / db })
        }
        _ => 0,
    }
}
