use anyhow::{anyhow, Result};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use vaultive_core::curve::Ed25519;
use vaultive_core::derive::derive_address;
use vaultive_solana_client::pda;

use crate::io::wallet;
use crate::output;

#[derive(Debug, Serialize)]
pub struct Derived {
    pub name: String,
    pub address: String,
    pub bump: u8,
}

#[derive(Debug, Serialize)]
pub struct DeriveOut {
    pub program_id: String,
    pub derived: Vec<Derived>,
}

pub async fn run(program_id: &str, state: Option<&str>, seeds: &[String]) -> Result<()> {
    let program_id = wallet::parse_pubkey(program_id, "program id")?;

    let derived = match state {
        Some(state) => {
            let state = wallet::parse_pubkey(state, "vault state")?;
            let pdas = pda::pdas_for_state(&program_id, &state)?;
            vec![
                Derived {
                    name: "vault_auth".to_string(),
                    address: pdas.auth.0.to_string(),
                    bump: pdas.auth.1,
                },
                Derived {
                    name: "vault".to_string(),
                    address: pdas.vault.0.to_string(),
                    bump: pdas.vault.1,
                },
            ]
        }
        None => {
            // Empty seed list is a valid derivation; it depends only on
            // the program id and the bump.
            let parsed: Vec<Vec<u8>> = seeds.iter().map(|s| parse_seed(s)).collect::<Result<_>>()?;
            let refs: Vec<&[u8]> = parsed.iter().map(|s| s.as_slice()).collect();
            let d = derive_address(&program_id.to_bytes(), &refs, &Ed25519)?;
            vec![Derived {
                name: "address".to_string(),
                address: Pubkey::new_from_array(d.address).to_string(),
                bump: d.bump,
            }]
        }
    };

    output::print(&DeriveOut { program_id: program_id.to_string(), derived })
}

/// Seed syntax: utf8 by default, `hex:` prefix for raw bytes, and bare
/// base58 that decodes to exactly 32 bytes is taken as a pubkey.
fn parse_seed(s: &str) -> Result<Vec<u8>> {
    if let Some(h) = s.strip_prefix("hex:") {
        return hex::decode(h).map_err(|_| anyhow!("invalid hex seed: {s}"));
    }
    if let Ok(bytes) = bs58::decode(s).into_vec() {
        if bytes.len() == 32 {
            return Ok(bytes);
        }
    }
    Ok(s.as_bytes().to_vec())
}
