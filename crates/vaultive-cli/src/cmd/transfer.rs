use anyhow::Result;
use serde::Serialize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::signature::Signer;

use vaultive_solana_client::token;

use crate::config::RpcSettings;
use crate::io::wallet;
use crate::output;

#[derive(Debug, Serialize)]
pub struct TransferOut {
    pub ok: bool,
    pub signature: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: u64,
    pub decimals: u8,
}

pub async fn run(
    settings: &RpcSettings,
    mint: &str,
    to: &str,
    amount: u64,
    decimals: u8,
) -> Result<()> {
    let mint = wallet::parse_pubkey(mint, "mint")?;
    let to_owner = wallet::parse_pubkey(to, "recipient")?;
    let payer = wallet::load_keypair(&settings.keypair_path)?;

    let rpc = RpcClient::new(settings.url.clone());

    let from_account = token::associated_token_address(&payer.pubkey(), &mint);
    let to_account = token::associated_token_address(&to_owner, &mint);

    let signature = token::transfer_between_owners(&rpc, &payer, &mint, &to_owner, amount, decimals)?;

    output::success(&format!("transfer confirmed: {signature}"));
    output::print(&TransferOut {
        ok: true,
        signature,
        from_account: from_account.to_string(),
        to_account: to_account.to_string(),
        amount,
        decimals,
    })
}
