//! vaultive-core
//!
//! Core primitives for vaultive:
//! - Seed and limit validation for address derivation
//! - Bump search with domain-separated SHA-256 hashing
//! - A pluggable curve point-validity interface (ed25519 by default)
//!
//! The deriver is a pure function of its inputs. It performs no I/O, holds
//! no shared state, and is safe to call concurrently. Anything that talks
//! to a ledger lives in `vaultive-solana-client`.

pub mod curve;
pub mod derive;
pub mod errors;
pub mod seeds;

pub use crate::errors::{DeriveError, DeriveResult};

/// A 32-byte program identifier that owns derived addresses.
pub type ProgramId = [u8; 32];

/// Domain separation suffixes.
/// These must remain stable: they are part of the derivation scheme.
pub mod domain {
    /// Trailing marker hashed after the seeds and program id. Matches the
    /// marker used by the target ledger's runtime, so addresses derived
    /// here line up with what the on-chain loader expects.
    pub const DERIVED_ADDRESS: &[u8] = b"ProgramDerivedAddress";
}

/// Convenience re-exports.
pub mod prelude {
    pub use crate::curve::PointValidator;
    #[cfg(feature = "ed25519")]
    pub use crate::curve::Ed25519;
    pub use crate::derive::{address_for_bump, derive_address};
    pub use crate::seeds::{DerivedAddress, MAX_SEEDS, MAX_SEED_LEN};
    pub use crate::{DeriveError, DeriveResult, ProgramId};
}
