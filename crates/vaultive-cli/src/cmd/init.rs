use anyhow::Result;
use serde::Serialize;
use solana_sdk::signature::{Keypair, Signer};

use vaultive_solana_client::vault_client::VaultClient;

use crate::config::RpcSettings;
use crate::io::wallet;
use crate::output;

#[derive(Debug, Serialize)]
pub struct InitOut {
    pub ok: bool,
    pub signature: String,
    pub vault_state: String,
    pub vault_auth: String,
    pub auth_bump: u8,
    pub vault: String,
    pub vault_bump: u8,
}

pub async fn run(settings: &RpcSettings, program_id: &str, airdrop: Option<u64>) -> Result<()> {
    let program_id = wallet::parse_pubkey(program_id, "program id")?;
    let owner = wallet::load_keypair(&settings.keypair_path)?;

    // The state account is created by the instruction, so it is a fresh
    // keypair signing its own creation; both PDAs chain off its key.
    let vault_state = Keypair::new();

    let client = VaultClient::with_rpc(program_id, &settings.url);

    if let Some(lamports) = airdrop {
        let sig = client.request_airdrop_and_confirm(&owner.pubkey(), lamports)?;
        output::eprintln_line(&format!("airdrop confirmed: {sig}"));
    }

    let pdas = client.pdas(&vault_state.pubkey())?;
    let ix = client.ix_initialize(owner.pubkey(), vault_state.pubkey())?;
    let signature = client.send_transaction(&owner, &[&vault_state], &[ix])?;

    output::success(&format!("vault initialized: {signature}"));
    output::print(&InitOut {
        ok: true,
        signature,
        vault_state: vault_state.pubkey().to_string(),
        vault_auth: pdas.auth.0.to_string(),
        auth_bump: pdas.auth.1,
        vault: pdas.vault.0.to_string(),
        vault_bump: pdas.vault.1,
    })
}
