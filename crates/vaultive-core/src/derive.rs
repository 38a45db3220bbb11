//! Deterministic address derivation.
//!
//! Candidates are SHA-256 digests over the ordered seeds, a trailing bump
//! byte, the owning program id, and the fixed domain-separation suffix.
//! The search walks the bump down from 255 and returns the first candidate
//! that is not a valid curve point, which guarantees the address has no
//! corresponding private key.

use sha2::{Digest, Sha256};

use crate::curve::PointValidator;
use crate::errors::{DeriveError, DeriveResult};
use crate::seeds::{validate_seeds, DerivedAddress};
use crate::{domain, ProgramId};

/// Derive a program-owned address for an ordered seed sequence.
///
/// Returns the first (highest) bump in `255..=0` whose candidate is
/// off-curve, together with that candidate. Fails with
/// [`DeriveError::Exhausted`] only if all 256 bumps are on-curve.
///
/// The empty seed sequence is valid; derivation then depends only on the
/// program id and the bump.
pub fn derive_address<V: PointValidator>(
    program_id: &ProgramId,
    seeds: &[&[u8]],
    curve: &V,
) -> DeriveResult<DerivedAddress> {
    validate_seeds(seeds, 1)?;

    for bump in (0..=u8::MAX).rev() {
        let address = candidate(program_id, seeds, bump);
        if !curve.is_on_curve(&address) {
            return Ok(DerivedAddress { address, bump });
        }
    }
    Err(DeriveError::Exhausted)
}

/// Compute the address for a fixed, caller-supplied bump.
///
/// Used to validate a stored bump against its seeds. Fails with
/// [`DeriveError::OnCurve`] when the candidate is a valid point.
pub fn address_for_bump<V: PointValidator>(
    program_id: &ProgramId,
    seeds: &[&[u8]],
    bump: u8,
    curve: &V,
) -> DeriveResult<[u8; 32]> {
    validate_seeds(seeds, 1)?;

    let address = candidate(program_id, seeds, bump);
    if curve.is_on_curve(&address) {
        return Err(DeriveError::OnCurve { bump });
    }
    Ok(address)
}

fn candidate(program_id: &ProgramId, seeds: &[&[u8]], bump: u8) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id);
    hasher.update(domain::DERIVED_ADDRESS);
    hasher.finalize().into()
}
