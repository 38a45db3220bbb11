//! Seed validation and the derived-address result type.

use crate::errors::{DeriveError, DeriveResult};

/// Maximum length of a single seed, in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds per derivation, trailing bump byte included.
pub const MAX_SEEDS: usize = 16;

/// A derived address together with the bump that produced it.
///
/// Valid only in association with the exact `(program id, seeds)` pair it
/// was computed from. The address bytes may themselves serve as a seed for
/// a further derivation; no special treatment is needed for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedAddress {
    pub address: [u8; 32],
    pub bump: u8,
}

impl DerivedAddress {
    /// Lowercase hex rendering of the address bytes.
    pub fn address_hex(&self) -> String {
        hex::encode(self.address)
    }
}

impl AsRef<[u8]> for DerivedAddress {
    fn as_ref(&self) -> &[u8] {
        &self.address
    }
}

/// Validate a seed sequence before any hashing happens.
///
/// `extra` counts seeds the caller will append (the trailing bump byte),
/// so the count check covers the sequence actually hashed.
pub fn validate_seeds(seeds: &[&[u8]], extra: usize) -> DeriveResult<()> {
    let count = seeds.len() + extra;
    if count > MAX_SEEDS {
        return Err(DeriveError::too_many_seeds(count, MAX_SEEDS));
    }
    for (index, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(DeriveError::seed_too_long(index, seed.len(), MAX_SEED_LEN));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_sequence_is_valid() {
        validate_seeds(&[], 1).unwrap();
    }

    #[test]
    fn oversized_seed_rejected() {
        let long = [0u8; MAX_SEED_LEN + 1];
        let seeds: &[&[u8]] = &[b"ok", &long];
        assert_matches!(
            validate_seeds(seeds, 1),
            Err(DeriveError::SeedTooLong { index: 1, .. })
        );
    }

    #[test]
    fn count_includes_the_bump() {
        let seed: &[u8] = b"s";
        let seeds = vec![seed; MAX_SEEDS];
        assert_matches!(
            validate_seeds(&seeds, 1),
            Err(DeriveError::TooManySeeds { count: 17, .. })
        );
        validate_seeds(&seeds[..MAX_SEEDS - 1], 1).unwrap();
    }
}
