//! Random 128-bit identifiers.
//!
//! Drawing every identifier from the operating system's entropy pool is
//! needlessly expensive for values that only have to be statistically unique.
//! [`RandomIdGenerator`] pays the entropy cost once: it seeds a fast
//! non-cryptographic generator from a cryptographically strong source, then
//! derives all subsequent identifiers from the seeded stream.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// An immutable 128-bit identifier.
///
/// Stored as its most and least significant 64-bit halves. `Display` renders
/// the canonical hyphenated 32-hex-digit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id {
    most: u64,
    least: u64,
}

impl Id {
    /// Build an identifier from its two halves.
    pub fn from_halves(most: u64, least: u64) -> Self {
        Self { most, least }
    }

    /// The most significant 64 bits.
    pub fn most_significant(self) -> u64 {
        self.most
    }

    /// The least significant 64 bits.
    pub fn least_significant(self) -> u64 {
        self.least
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.most >> 32,
            (self.most >> 16) & 0xffff,
            self.most & 0xffff,
            self.least >> 48,
            self.least & 0xffff_ffff_ffff,
        )
    }
}

/// Source of identifiers.
pub trait IdGenerator {
    /// Produce the next identifier.
    fn generate_id(&mut self) -> Id;
}

/// Generator that seeds a fast generator once and derives identifiers from it.
///
/// The seed is 8 bytes from a cryptographically strong source; everything
/// after that comes from a deterministic non-cryptographic stream, so the
/// sequence is reproducible given the seed and must not be used where
/// unpredictability matters. Identifiers carry no uniqueness guarantee beyond
/// statistical randomness.
///
/// The generator is not synchronized. To share one across threads, wrap it in
/// a `Mutex`; to avoid contention, give each thread its own.
pub struct RandomIdGenerator {
    rng: SmallRng,
}

impl RandomIdGenerator {
    /// Seed from the operating system's entropy pool.
    pub fn new() -> Self {
        Self::from_seed(rand::rng().next_u64())
    }

    /// Seed explicitly. The identifier sequence is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomIdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomIdGenerator").finish_non_exhaustive()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate_id(&mut self) -> Id {
        // 16 fresh bytes per identifier, packed big-endian into the halves.
        let mut most = [0u8; 8];
        let mut least = [0u8; 8];
        self.rng.fill_bytes(&mut most);
        self.rng.fill_bytes(&mut least);
        Id {
            most: u64::from_be_bytes(most),
            least: u64::from_be_bytes(least),
        }
    }
}
