//! Explicit runtime settings for commands.
//!
//! Commands receive endpoint and wallet location as values, never as
//! process-global state; the library crates read no environment variables.

use crate::args::Cli;

#[derive(Debug, Clone)]
pub struct RpcSettings {
    pub url: String,
    pub keypair_path: String,
}

impl RpcSettings {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            url: cli.url.clone(),
            keypair_path: cli.keypair.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn settings_come_from_global_flags() {
        let cli = Cli::parse_from([
            "vaultive",
            "--url",
            "http://localhost:8899",
            "--keypair",
            "/tmp/id.json",
            "doctor",
        ]);
        let s = RpcSettings::from_cli(&cli);
        assert_eq!(s.url, "http://localhost:8899");
        assert_eq!(s.keypair_path, "/tmp/id.json");
    }
}
