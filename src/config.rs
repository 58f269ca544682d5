//! Configuration for the numeric execution unit.
//!
//! The unit is almost entirely stateless; the only construction-time
//! parameters are the seed of the per-instance pseudo-random stream (used by
//! the fault injector and the amplitude engine) and diagnostic switches.
//! Configuration is supplied via JSON from the host simulator or use
//! `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the execution unit.
mod defaults {
    /// Default seed for the per-instance pseudo-random stream.
    ///
    /// Any non-zero value is valid; a zero seed would lock the xorshift
    /// generator at zero and is remapped at construction.
    pub const RNG_SEED: u64 = 123_456_789;

    /// Whether operand-cache hits emit a trace event.
    pub const TRACE_CACHE_HITS: bool = false;
}

/// Execution unit configuration.
///
/// All fields have defaults so partial configurations deserialize cleanly.
#[derive(Clone, Debug, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Config {
    /// Seed for the pseudo-random stream (fault injector, amplitude noise,
    /// measurement collapse). Zero is remapped to the default seed.
    pub rng_seed: u64,

    /// Emit a `trace`-level log event on every operand-cache hit.
    pub trace_cache_hits: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rng_seed: defaults::RNG_SEED,
            trace_cache_hits: defaults::TRACE_CACHE_HITS,
        }
    }
}
