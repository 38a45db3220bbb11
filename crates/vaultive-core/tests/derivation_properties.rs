//! Black-box properties of the deriver with the real ed25519 validator.
//!
//! The golden vectors were captured once from the reference derivation and
//! are asserted on every run; a change here means the scheme itself moved.

use proptest::prelude::*;

use vaultive_core::curve::{Ed25519, PointValidator};
use vaultive_core::derive::{address_for_bump, derive_address};
use vaultive_core::ProgramId;

const PROGRAM_ID: ProgramId = *b"vaultive-golden-program-id-00001";
const STATE: [u8; 32] = *b"vaultive-golden-state-account-01";

#[test]
fn golden_vault_authority_chain() {
    let auth = derive_address(&PROGRAM_ID, &[b"auth", &STATE], &Ed25519).unwrap();
    assert_eq!(
        auth.address_hex(),
        "8565d60fe2a332613eb1c435f0f42beaf9db76c0f51e27496685b253fdc7b935"
    );
    assert_eq!(auth.bump, 252);

    let vault = derive_address(&PROGRAM_ID, &[b"vault", &auth.address], &Ed25519).unwrap();
    assert_eq!(
        vault.address_hex(),
        "59607dc1a03077d63bd71296012837884de048425f55fc5ffbed9f778b585f79"
    );
    assert_eq!(vault.bump, 254);
}

#[test]
fn golden_single_seed() {
    let d = derive_address(&PROGRAM_ID, &[b"vault"], &Ed25519).unwrap();
    assert_eq!(
        d.address_hex(),
        "e0c1af47d1ddc78485ba6c9dc0ccd609ab01e34b97650fce05f6dd344e7e4ecf"
    );
    assert_eq!(d.bump, 255);
}

#[test]
fn seed_order_matters() {
    let ab = derive_address(&PROGRAM_ID, &[b"a", b"b"], &Ed25519).unwrap();
    let ba = derive_address(&PROGRAM_ID, &[b"b", b"a"], &Ed25519).unwrap();
    assert_ne!(ab.address, ba.address);
}

#[test]
fn stored_bump_revalidates() {
    let d = derive_address(&PROGRAM_ID, &[b"auth", &STATE], &Ed25519).unwrap();
    let a = address_for_bump(&PROGRAM_ID, &[b"auth", &STATE], d.bump, &Ed25519).unwrap();
    assert_eq!(a, d.address);
}

proptest! {
    #[test]
    fn derivation_is_deterministic(
        program_id in any::<[u8; 32]>(),
        seeds in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..=32), 0..=8),
    ) {
        let refs: Vec<&[u8]> = seeds.iter().map(|s| s.as_slice()).collect();
        let a = derive_address(&program_id, &refs, &Ed25519).unwrap();
        let b = derive_address(&program_id, &refs, &Ed25519).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn derived_addresses_are_off_curve(
        program_id in any::<[u8; 32]>(),
        seeds in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..=32), 0..=4),
    ) {
        let refs: Vec<&[u8]> = seeds.iter().map(|s| s.as_slice()).collect();
        let d = derive_address(&program_id, &refs, &Ed25519).unwrap();
        prop_assert!(!Ed25519.is_on_curve(&d.address));
    }

    #[test]
    fn chaining_is_referentially_transparent(
        program_id in any::<[u8; 32]>(),
        s1 in prop::collection::vec(any::<u8>(), 0..=32),
        s2 in prop::collection::vec(any::<u8>(), 0..=32),
    ) {
        let a = derive_address(&program_id, &[s1.as_slice()], &Ed25519).unwrap();

        let via_struct = derive_address(&program_id, &[s2.as_slice(), a.as_ref()], &Ed25519).unwrap();
        let bytes = a.address.to_vec();
        let via_bytes = derive_address(&program_id, &[s2.as_slice(), bytes.as_slice()], &Ed25519).unwrap();

        prop_assert_eq!(via_struct, via_bytes);
    }
}
