//! Token-account collaborator: associated accounts and checked transfers.
//!
//! Associated accounts are derived by the associated-token program, not by
//! this crate; we only look them up, create them when missing, and move
//! decimal-scaled integer amounts between them. RPC and token-program
//! errors pass through unmodified.

use anyhow::{anyhow, Result};
use solana_client::rpc_client::RpcClient;
use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::instruction::create_associated_token_account;

/// The associated token account for an owner and a mint.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Return the associated account for `(owner, mint)`, creating it when it
/// does not exist yet. The payer funds the creation.
pub fn ensure_associated_account(
    rpc: &RpcClient,
    payer: &Keypair,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey> {
    let address = get_associated_token_address(owner, mint);

    let existing = rpc.get_account_with_commitment(&address, CommitmentConfig::confirmed())?;
    if existing.value.is_some() {
        return Ok(address);
    }

    tracing::debug!(%address, %owner, %mint, "creating associated token account");
    let ix = create_associated_token_account(&payer.pubkey(), owner, mint, &spl_token::id());
    let bh = rpc.get_latest_blockhash()?;
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[payer], bh);
    rpc.send_and_confirm_transaction(&tx)?;
    Ok(address)
}

/// Build a checked transfer between two token accounts.
pub fn ix_transfer_checked(
    mint: &Pubkey,
    source: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
    decimals: u8,
) -> Result<Instruction> {
    spl_token::instruction::transfer_checked(
        &spl_token::id(),
        source,
        mint,
        destination,
        authority,
        &[],
        amount,
        decimals,
    )
    .map_err(|e| anyhow!("build transfer instruction: {e}"))
}

/// Transfer between the payer's and a recipient's associated accounts,
/// creating either side when missing.
pub fn transfer_between_owners(
    rpc: &RpcClient,
    payer: &Keypair,
    mint: &Pubkey,
    to_owner: &Pubkey,
    amount: u64,
    decimals: u8,
) -> Result<String> {
    let from = ensure_associated_account(rpc, payer, &payer.pubkey(), mint)?;
    let to = ensure_associated_account(rpc, payer, to_owner, mint)?;

    let ix = ix_transfer_checked(mint, &from, &to, &payer.pubkey(), amount, decimals)?;
    let bh = rpc.get_latest_blockhash()?;
    let tx = Transaction::new_signed_with_payer(&[ix], Some(&payer.pubkey()), &[payer], bh);
    let sig = rpc.send_and_confirm_transaction(&tx)?;
    tracing::debug!(%sig, %from, %to, amount, "transfer confirmed");
    Ok(sig.to_string())
}
