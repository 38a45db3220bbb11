//! Vault client for the on-chain vault program.
//!
//! This client can:
//! - derive the vault PDA chain
//! - build the initialize instruction in the program's wire format
//! - submit transactions and fund accounts via RPC
//!
//! The RPC endpoint is explicit state on the client, never process-global
//! configuration. Methods that need it fail with a clear error when the
//! client was constructed without one.

use std::time::Duration;

use anyhow::{anyhow, Result};
use sha2::{Digest, Sha256};
use solana_client::rpc_client::RpcClient;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

use crate::pda::{self, VaultPdas};

const AIRDROP_CONFIRM_ATTEMPTS: u32 = 60;
const AIRDROP_CONFIRM_INTERVAL: Duration = Duration::from_millis(500);

pub struct VaultClient {
    pub program_id: Pubkey,
    pub rpc: Option<RpcClient>,
}

impl VaultClient {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id, rpc: None }
    }

    pub fn with_rpc(program_id: Pubkey, rpc_url: &str) -> Self {
        Self { program_id, rpc: Some(RpcClient::new(rpc_url.to_string())) }
    }

    pub fn pdas(&self, vault_state: &Pubkey) -> Result<VaultPdas> {
        Ok(pda::pdas_for_state(&self.program_id, vault_state)?)
    }

    /// Build the initialize instruction.
    ///
    /// Account order matches the on-chain program: owner and vault state
    /// sign (the state account is created by the instruction), the
    /// authority is read-only, the vault is written.
    pub fn ix_initialize(&self, owner: Pubkey, vault_state: Pubkey) -> Result<Instruction> {
        let pdas = self.pdas(&vault_state)?;
        tracing::debug!(
            %vault_state,
            vault_auth = %pdas.auth.0,
            vault = %pdas.vault.0,
            "building initialize instruction"
        );

        Ok(Instruction {
            program_id: self.program_id,
            accounts: vec![
                AccountMeta::new(owner, true),
                AccountMeta::new(vault_state, true),
                AccountMeta::new_readonly(pdas.auth.0, false),
                AccountMeta::new(pdas.vault.0, false),
                AccountMeta::new_readonly(solana_program::system_program::id(), false),
            ],
            data: anchor_discriminator("initialize").to_vec(),
        })
    }

    /// Submit a transaction. Requires the client to be constructed with RPC.
    pub fn send_transaction(
        &self,
        payer: &Keypair,
        extra_signers: &[&Keypair],
        ixs: &[Instruction],
    ) -> Result<String> {
        let rpc = self.rpc()?;
        let bh = rpc.get_latest_blockhash()?;

        let mut signers: Vec<&Keypair> = Vec::with_capacity(1 + extra_signers.len());
        signers.push(payer);
        signers.extend_from_slice(extra_signers);

        let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), &signers, bh);
        let sig = rpc.send_and_confirm_transaction(&tx)?;
        tracing::debug!(%sig, "transaction confirmed");
        Ok(sig.to_string())
    }

    /// Request an airdrop without waiting for confirmation.
    pub fn request_airdrop(&self, to: &Pubkey, lamports: u64) -> Result<Signature> {
        let sig = self.rpc()?.request_airdrop(to, lamports)?;
        tracing::debug!(%sig, %to, lamports, "airdrop requested");
        Ok(sig)
    }

    /// Whether a signature has reached the default commitment.
    pub fn confirm(&self, signature: &Signature) -> Result<bool> {
        Ok(self.rpc()?.confirm_transaction(signature)?)
    }

    /// Request an airdrop and poll until it confirms or the attempt budget
    /// runs out.
    pub fn request_airdrop_and_confirm(&self, to: &Pubkey, lamports: u64) -> Result<Signature> {
        let sig = self.request_airdrop(to, lamports)?;
        for _ in 0..AIRDROP_CONFIRM_ATTEMPTS {
            if self.confirm(&sig)? {
                tracing::debug!(%sig, "airdrop confirmed");
                return Ok(sig);
            }
            std::thread::sleep(AIRDROP_CONFIRM_INTERVAL);
        }
        Err(anyhow!("airdrop {sig} was not confirmed in time"))
    }

    fn rpc(&self) -> Result<&RpcClient> {
        self.rpc.as_ref().ok_or_else(|| anyhow!("rpc client not configured"))
    }
}

/// Anchor's global instruction discriminator: sha256("global:<name>")[..8].
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(b"global:");
    hasher.update(method.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_discriminator_is_stable() {
        assert_eq!(
            anchor_discriminator("initialize"),
            [175, 175, 109, 31, 13, 152, 155, 237]
        );
    }

    #[test]
    fn initialize_accounts_in_program_order() {
        let client = VaultClient::new(Pubkey::new_unique());
        let owner = Pubkey::new_unique();
        let state = Pubkey::new_unique();

        let ix = client.ix_initialize(owner, state).unwrap();
        let pdas = client.pdas(&state).unwrap();

        assert_eq!(ix.program_id, client.program_id);
        assert_eq!(ix.data, anchor_discriminator("initialize").to_vec());

        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(ix.accounts[0].pubkey, owner);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, state);
        assert!(ix.accounts[1].is_signer && ix.accounts[1].is_writable);
        assert_eq!(ix.accounts[2].pubkey, pdas.auth.0);
        assert!(!ix.accounts[2].is_signer && !ix.accounts[2].is_writable);
        assert_eq!(ix.accounts[3].pubkey, pdas.vault.0);
        assert!(!ix.accounts[3].is_signer && ix.accounts[3].is_writable);
        assert_eq!(ix.accounts[4].pubkey, solana_program::system_program::id());
    }

    #[test]
    fn send_without_rpc_is_an_error() {
        let client = VaultClient::new(Pubkey::new_unique());
        let payer = Keypair::new();
        let err = client.send_transaction(&payer, &[], &[]).unwrap_err();
        assert!(err.to_string().contains("rpc client not configured"));
    }
}
