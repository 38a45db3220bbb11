//! Constants shared between the on-chain program and clients.
//!
//! Keep these stable because they affect PDA derivation.

use solana_program::pubkey::Pubkey;

/// Seed for the vault authority, combined with the vault-state key.
pub const SEED_AUTH: &[u8] = b"auth";

/// Seed for the vault itself, combined with the authority address.
pub const SEED_VAULT: &[u8] = b"vault";

/// Seed for owner-scoped vault state accounts.
pub const SEED_STATE: &[u8] = b"state";

/// Default program id (placeholder).
///
/// Replace this with the deployed program id when available.
pub const DEFAULT_PROGRAM_ID: &str = "Vau1tive11111111111111111111111111111111111";

pub fn default_program_id() -> Pubkey {
    DEFAULT_PROGRAM_ID.parse().unwrap_or_else(|_| Pubkey::default())
}
