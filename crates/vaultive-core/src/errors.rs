//! Error types for address derivation.
//!
//! Derivation owns exactly one fatal error kind: [`DeriveError::Exhausted`].
//! Everything else is input validation that fires before any hashing runs.
//! Network and ledger failures never appear here; those belong to the
//! client collaborators and are propagated unmodified by wrapping code.

use thiserror::Error;

pub type DeriveResult<T> = Result<T, DeriveError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    /// A seed exceeded the per-seed byte limit. Rejected before hashing.
    #[error("seed {index} is {len} bytes, limit is {max}")]
    SeedTooLong { index: usize, len: usize, max: usize },

    /// The seed sequence (bump included) exceeded the scheme's limit.
    #[error("{count} seeds given, limit is {max}")]
    TooManySeeds { count: usize, max: usize },

    /// The candidate for a fixed bump is a valid curve point and therefore
    /// not a program-owned address.
    #[error("candidate for bump {bump} is a valid curve point")]
    OnCurve { bump: u8 },

    /// Every bump from 255 down to 0 produced an on-curve candidate.
    /// Fatal to the derivation call; never retried with different seeds.
    #[error("no off-curve address exists for these seeds")]
    Exhausted,
}

impl DeriveError {
    pub fn seed_too_long(index: usize, len: usize, max: usize) -> Self {
        Self::SeedTooLong { index, len, max }
    }

    pub fn too_many_seeds(count: usize, max: usize) -> Self {
        Self::TooManySeeds { count, max }
    }
}
