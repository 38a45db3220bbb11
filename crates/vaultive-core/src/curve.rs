//! Curve point-validity interface.
//!
//! The bump search only needs one question answered: does a 32-byte
//! candidate decode to a valid point on the target curve? Keeping that
//! behind a trait keeps the hashing and search logic independent of any
//! particular curve implementation.

/// Point-validity predicate over an elliptic-curve group.
pub trait PointValidator {
    /// Whether `candidate` corresponds to a valid point on the curve.
    ///
    /// Derived addresses must be off-curve, so a `true` here disqualifies
    /// the candidate.
    fn is_on_curve(&self, candidate: &[u8; 32]) -> bool;
}

/// Ed25519 point validity via edwards-point decompression.
///
/// A candidate is on-curve exactly when its compressed Y form decompresses.
#[cfg(feature = "ed25519")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519;

#[cfg(feature = "ed25519")]
impl PointValidator for Ed25519 {
    fn is_on_curve(&self, candidate: &[u8; 32]) -> bool {
        curve25519_dalek::edwards::CompressedEdwardsY(*candidate)
            .decompress()
            .is_some()
    }
}
