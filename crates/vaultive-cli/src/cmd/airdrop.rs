use std::time::Duration;

use anyhow::{anyhow, Result};
use indicatif::ProgressBar;
use serde::Serialize;
use solana_client::rpc_client::RpcClient;
use solana_sdk::signature::Signer;

use crate::config::RpcSettings;
use crate::io::wallet;
use crate::output;

const CONFIRM_ATTEMPTS: u32 = 120;
const CONFIRM_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Serialize)]
pub struct AirdropOut {
    pub ok: bool,
    pub to: String,
    pub lamports: u64,
    pub signature: String,
}

pub async fn run(settings: &RpcSettings, to: Option<&str>, lamports: u64) -> Result<()> {
    let recipient = match to {
        Some(s) => wallet::parse_pubkey(s, "recipient")?,
        None => wallet::load_keypair(&settings.keypair_path)?.pubkey(),
    };

    let rpc = RpcClient::new(settings.url.clone());
    let sig = rpc.request_airdrop(&recipient, lamports)?;

    let spinner = if output::is_json() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_message("waiting for confirmation");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let mut confirmed = false;
    for _ in 0..CONFIRM_ATTEMPTS {
        if rpc.confirm_transaction(&sig)? {
            confirmed = true;
            break;
        }
        std::thread::sleep(CONFIRM_INTERVAL);
    }
    spinner.finish_and_clear();

    if !confirmed {
        return Err(anyhow!("airdrop {sig} was not confirmed in time"));
    }

    output::success(&format!("airdrop confirmed: {sig}"));
    output::print(&AirdropOut {
        ok: true,
        to: recipient.to_string(),
        lamports,
        signature: sig.to_string(),
    })
}
