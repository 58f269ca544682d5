//! The execution unit and its dispatcher.
//!
//! [`ExecUnit`] owns the only cross-call state in the core: four one-entry
//! operand caches and the pseudo-random stream. Everything else is pure
//! and dispatched straight to the sub-engines.
//!
//! The unit is single-threaded cooperative: one call at a time per
//! instance. A multi-threaded host must give each thread its own instance;
//! nothing here is shared.

/// Sub-engines (integer, float, formats, ECC, quantum, fault).
pub mod units;

use crate::common::Xorshift64;
use crate::config::Config;
use crate::isa::AluOp;
use units::alu::cache::{split_add, split_div, split_mul, split_sub, OperandCache};
use units::alu::Alu;
use units::fpu::{Fpu, FpFlags, RoundingMode};
use units::{ecc, fault, quantum};

/// Numeric execution unit.
///
/// Construct one per simulated hart with [`ExecUnit::new`] and route every
/// operation through the three entry points: [`execute`](Self::execute)
/// for the integer-side families, [`fpexecute`](Self::fpexecute) for
/// binary32 and the packed formats, and [`dfpexecute`](Self::dfpexecute)
/// for binary64.
pub struct ExecUnit {
    /// Cache for `AddCache` (commutative).
    add_cache: OperandCache,
    /// Cache for `SubCache`.
    sub_cache: OperandCache,
    /// Cache for `MulCache` (commutative).
    mul_cache: OperandCache,
    /// Cache for `DivCache`.
    div_cache: OperandCache,
    /// Pseudo-random stream for fault injection and the amplitude engine.
    rng: Xorshift64,
    /// Emit a trace event on operand-cache hits.
    trace_cache_hits: bool,
}

impl ExecUnit {
    /// Creates a unit from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            add_cache: OperandCache::new(true),
            sub_cache: OperandCache::new(false),
            mul_cache: OperandCache::new(true),
            div_cache: OperandCache::new(false),
            rng: Xorshift64::new(config.rng_seed),
            trace_cache_hits: config.trace_cache_hits,
        }
    }

    /// Executes an integer-side operation.
    ///
    /// Covers the scalar integer, SIMD, cached, fault, ECC, and quantum
    /// families. Takes `&mut self` because the caches and the random
    /// stream are the unit's only mutable state.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand.
    ///
    /// # Returns
    ///
    /// A `(result, overflow)` pair. Unknown opcodes return `(0, false)`.
    pub fn execute(&mut self, op: AluOp, a: u64, b: u64) -> (u64, bool) {
        match op {
            AluOp::AddCache => (self.through_cache(op, a, b, split_add), false),
            AluOp::SubCache => (self.through_cache(op, a, b, split_sub), false),
            AluOp::MulCache => (self.through_cache(op, a, b, split_mul), false),
            AluOp::DivCache => (self.through_cache(op, a, b, split_div), false),

            AluOp::RandomFlip => (fault::random_flip(a, &mut self.rng), false),

            AluOp::EccCheck | AluOp::EccAdd | AluOp::EccSub | AluOp::EccMul | AluOp::EccDiv => {
                (ecc::execute(op, a, b), false)
            }

            AluOp::QAllocA
            | AluOp::QAllocB
            | AluOp::QHa
            | AluOp::QHb
            | AluOp::QPhase
            | AluOp::QXa
            | AluOp::QXb
            | AluOp::QMeas
            | AluOp::QNormA
            | AluOp::QNormB => (quantum::execute(op, a, b, &mut self.rng), false),

            _ => Alu::execute(op, a, b),
        }
    }

    /// Executes a single-precision or packed-format operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand (binary32 in the low 32 bits, or packed).
    /// * `b`  - Second operand.
    /// * `c`  - Third operand for fused multiply-add forms.
    /// * `rm` - 3-bit rounding-mode hint; unrecognized encodings keep the
    ///   default nearest-even behavior.
    ///
    /// # Returns
    ///
    /// A `(result, flags)` pair. Unknown opcodes return
    /// `(0, FpFlags::NONE)`.
    pub fn fpexecute(&self, op: AluOp, a: u64, b: u64, c: u64, rm: u8) -> (u64, FpFlags) {
        let mode = RoundingMode::from_bits(rm).unwrap_or(RoundingMode::Rne);
        Fpu::execute_single(op, a, b, c, mode)
    }

    /// Executes a double-precision operation.
    ///
    /// Same conventions as [`fpexecute`](Self::fpexecute); the flag byte
    /// collapses to a single any-exception bool, which is all this
    /// interface carries for binary64.
    pub fn dfpexecute(&self, op: AluOp, a: u64, b: u64, c: u64, rm: u8) -> (u64, bool) {
        let mode = RoundingMode::from_bits(rm).unwrap_or(RoundingMode::Rne);
        let (result, flags) = Fpu::execute_double(op, a, b, c, mode);
        (result, !flags.is_empty())
    }

    /// Runs a cached opcode: lookup, compute on miss, refill.
    fn through_cache(&mut self, op: AluOp, a: u64, b: u64, compute: fn(u64, u64) -> u64) -> u64 {
        let trace = self.trace_cache_hits;
        let cache = match op {
            AluOp::AddCache => &mut self.add_cache,
            AluOp::SubCache => &mut self.sub_cache,
            AluOp::MulCache => &mut self.mul_cache,
            _ => &mut self.div_cache,
        };
        if let Some(hit) = cache.lookup(a, b) {
            if trace {
                log::trace!("operand cache hit: {op:?} a={a:#018x} b={b:#018x}");
            }
            return hit;
        }
        let result = compute(a, b);
        cache.insert(a, b, result);
        result
    }
}

impl Default for ExecUnit {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
