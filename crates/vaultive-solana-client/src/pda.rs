//! PDA derivation helpers for the vault program.
//!
//! The vault uses a two-step chain: the authority is derived from the
//! vault-state key, and the vault is derived from that authority. A derived
//! address feeding the next derivation needs no special handling; it is
//! just another 32-byte seed.

use solana_program::pubkey::Pubkey;

use vaultive_core::curve::Ed25519;
use vaultive_core::derive::derive_address;
use vaultive_core::DeriveResult;

use crate::constants::{SEED_AUTH, SEED_STATE, SEED_VAULT};

/// The chained pair most flows need, each with its canonical bump.
#[derive(Debug, Clone)]
pub struct VaultPdas {
    pub auth: (Pubkey, u8),
    pub vault: (Pubkey, u8),
}

/// Derive the vault authority for a vault-state account.
pub fn derive_vault_authority(program_id: &Pubkey, vault_state: &Pubkey) -> DeriveResult<(Pubkey, u8)> {
    derive(program_id, &[SEED_AUTH, vault_state.as_ref()])
}

/// Derive the vault address from its authority.
pub fn derive_vault(program_id: &Pubkey, vault_auth: &Pubkey) -> DeriveResult<(Pubkey, u8)> {
    derive(program_id, &[SEED_VAULT, vault_auth.as_ref()])
}

/// Derive an owner-scoped vault-state address.
pub fn derive_vault_state(program_id: &Pubkey, owner: &Pubkey) -> DeriveResult<(Pubkey, u8)> {
    derive(program_id, &[SEED_STATE, owner.as_ref()])
}

/// Derive the full authority -> vault chain for a vault-state account.
pub fn pdas_for_state(program_id: &Pubkey, vault_state: &Pubkey) -> DeriveResult<VaultPdas> {
    let auth = derive_vault_authority(program_id, vault_state)?;
    let vault = derive_vault(program_id, &auth.0)?;
    Ok(VaultPdas { auth, vault })
}

fn derive(program_id: &Pubkey, seeds: &[&[u8]]) -> DeriveResult<(Pubkey, u8)> {
    let d = derive_address(&program_id.to_bytes(), seeds, &Ed25519)?;
    Ok((Pubkey::new_from_array(d.address), d.bump))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_depends_on_state_key() {
        let program_id = Pubkey::new_unique();
        let a = derive_vault_authority(&program_id, &Pubkey::new_unique()).unwrap();
        let b = derive_vault_authority(&program_id, &Pubkey::new_unique()).unwrap();
        assert_ne!(a.0, b.0);
    }

    #[test]
    fn chain_matches_stepwise_derivation() {
        let program_id = Pubkey::new_unique();
        let state = Pubkey::new_unique();

        let pdas = pdas_for_state(&program_id, &state).unwrap();
        let auth = derive_vault_authority(&program_id, &state).unwrap();
        let vault = derive_vault(&program_id, &auth.0).unwrap();

        assert_eq!(pdas.auth, auth);
        assert_eq!(pdas.vault, vault);
    }
}
