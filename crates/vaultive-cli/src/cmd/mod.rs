use anyhow::Result;

use crate::args::{Cli, Command};
use crate::config::RpcSettings;

mod airdrop;
mod derive;
mod doctor;
mod init;
mod transfer;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let settings = RpcSettings::from_cli(&cli);

    match cli.command {
        Command::Derive { program_id, state, seeds } => {
            derive::run(&program_id, state.as_deref(), &seeds).await
        }
        Command::Init { program_id, airdrop } => {
            init::run(&settings, &program_id, airdrop).await
        }
        Command::Airdrop { to, lamports } => {
            airdrop::run(&settings, to.as_deref(), lamports).await
        }
        Command::Transfer { mint, to, amount, decimals } => {
            transfer::run(&settings, &mint, &to, amount, decimals).await
        }
        Command::Doctor => doctor::run().await,
    }
}
