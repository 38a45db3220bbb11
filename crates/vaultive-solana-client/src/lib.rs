//! vaultive-solana-client
//!
//! This crate provides a small, focused Rust client for the vault program's
//! off-chain side.
//!
//! It includes:
//! - typed PDA derivation for the vault seed chain (authority, vault, state)
//! - a vault client that builds instructions and submits transactions
//! - airdrop funding with confirmation polling
//! - associated token-account lookup-or-create and checked transfers
//!
//! Derivation goes through `vaultive-core` with the ed25519 validator, so
//! exhaustion surfaces as a typed error instead of aborting. RPC failures
//! are propagated unmodified.
//!
//! Note: the on-chain program id is expected to be provided by the
//! consumer. The default here is a placeholder constant for local
//! development.

pub mod constants;
pub mod pda;
pub mod token;
pub mod vault_client;

pub use constants::*;
pub use pda::*;
pub use vault_client::*;
