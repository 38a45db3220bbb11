use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "vaultive", version, about = "Vaultive CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// RPC endpoint URL.
    #[arg(long, global = true, default_value = "https://api.devnet.solana.com")]
    pub url: String,

    /// Path to the payer keypair file.
    #[arg(long, global = true, default_value = "wallet.json")]
    pub keypair: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Derive program-owned addresses.
    Derive {
        /// Owning program id (base58).
        #[arg(long)]
        program_id: String,

        /// Vault-state pubkey; derives the authority and vault chain.
        #[arg(long, conflicts_with = "seeds")]
        state: Option<String>,

        /// Ordered seeds for a generic derivation. Utf8 by default;
        /// prefix with `hex:` for raw bytes; bare base58 decoding to
        /// 32 bytes is taken as a pubkey.
        #[arg(long = "seed")]
        seeds: Vec<String>,
    },

    /// Initialize a vault: fresh state keypair, derived chain, one
    /// initialize transaction.
    Init {
        /// Owning program id (base58).
        #[arg(long)]
        program_id: String,

        /// Airdrop this many lamports to the owner before submitting.
        #[arg(long)]
        airdrop: Option<u64>,
    },

    /// Request lamports for a pubkey and wait for confirmation.
    Airdrop {
        /// Recipient; defaults to the configured keypair's pubkey.
        #[arg(long)]
        to: Option<String>,

        /// Amount in lamports.
        #[arg(long, default_value_t = 2_000_000_000)]
        lamports: u64,
    },

    /// Transfer tokens between associated accounts, creating them when
    /// missing.
    Transfer {
        /// Token mint (base58).
        #[arg(long)]
        mint: String,

        /// Recipient wallet (base58).
        #[arg(long)]
        to: String,

        /// Amount in base units (decimal-scaled integer).
        #[arg(long)]
        amount: u64,

        /// Mint decimals used for the checked transfer.
        #[arg(long, default_value_t = 6)]
        decimals: u8,
    },

    /// Run environment checks.
    Doctor,
}
