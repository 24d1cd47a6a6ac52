//! Deterministic RNG wrapper for delay sampling.
//!
//! # Determinism strategy
//!
//! Arrival-time prediction draws pseudo-random delay samples.  To keep runs
//! reproducible, every sampler is seeded explicitly; per-agent streams are
//! derived as:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Agents therefore never share RNG state, and adding agents does not
//! disturb the streams of existing ones.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic source of randomness for delay sampling.
///
/// The type is `!Sync` so a stream cannot accidentally be shared across
/// threads; give each worker its own `SampleRng`.
pub struct SampleRng(SmallRng);

impl SampleRng {
    /// Seed directly from a run-level seed.
    pub fn new(seed: u64) -> Self {
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive the stream for one agent from the run's global seed.
    pub fn for_agent(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        SampleRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`dist.sample(rng.inner())`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}
