use anyhow::{anyhow, Result};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{read_keypair_file, Keypair};

pub fn load_keypair(path: &str) -> Result<Keypair> {
    read_keypair_file(path).map_err(|e| anyhow!("failed to read keypair {path}: {e}"))
}

pub fn parse_pubkey(s: &str, what: &str) -> Result<Pubkey> {
    s.parse().map_err(|_| anyhow!("invalid {what} pubkey: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::{write_keypair_file, Signer};

    #[test]
    fn roundtrip_keypair_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.json");

        let kp = Keypair::new();
        write_keypair_file(&kp, &path).unwrap();

        let loaded = load_keypair(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.pubkey(), kp.pubkey());
    }

    #[test]
    fn missing_file_is_a_clear_error() {
        let err = load_keypair("/nonexistent/wallet.json").unwrap_err();
        assert!(err.to_string().contains("failed to read keypair"));
    }

    #[test]
    fn bad_pubkey_names_the_field() {
        let err = parse_pubkey("not-a-key", "mint").unwrap_err();
        assert!(err.to_string().contains("invalid mint pubkey"));
    }
}
