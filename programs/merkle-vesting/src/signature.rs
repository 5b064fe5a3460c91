//! Admin-signature claim authorization.
//!
//! The admin signs the keccak256 digest of the full claim parameters
//! through the Ethereum "personal message" scheme: the digest is
//! prefixed and re-hashed before signing, which keeps a vesting
//! authorization from doubling as any other kind of signed message.
//! Verification recovers the signer with the secp256k1 recovery
//! syscall and compares its Ethereum-style address against the trusted
//! admin signer.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use anchor_lang::solana_program::secp256k1_recover::secp256k1_recover;

/// Expected signature layout: `r (32) || s (32) || v (1)`.
pub const SIGNATURE_LEN: usize = 65;

const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Half the secp256k1 group order. Signatures with `s` above this are
/// the malleable form of an otherwise valid signature and are rejected.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];

/// Digest over the full claim parameters:
/// `claimant (32) || total_amount (8 LE) || amount (8 LE) || unlock_time (8 LE)`.
///
/// Every field the handler acts on is part of the signed payload, so
/// altering any of them after signing invalidates the signature.
pub fn claim_digest(claimant: &Pubkey, total_amount: u64, amount: u64, unlock_time: i64) -> [u8; 32] {
    keccak::hashv(&[
        claimant.as_ref(),
        &total_amount.to_le_bytes(),
        &amount.to_le_bytes(),
        &unlock_time.to_le_bytes(),
    ])
    .to_bytes()
}

/// Applies the personal-message prefix transform to a 32-byte digest.
pub fn prefixed_digest(digest: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[PERSONAL_MESSAGE_PREFIX, digest]).to_bytes()
}

/// Recovers the Ethereum-style address that signed `digest`.
///
/// Total function: wrong length, unknown recovery id, high-s form and
/// recovery failure all yield None, never an error.
pub fn recover_signer(digest: &[u8; 32], signature: &[u8]) -> Option<[u8; 20]> {
    if signature.len() != SIGNATURE_LEN {
        return None;
    }
    let recovery_id = match signature[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return None,
    };
    if &signature[32..64] > &SECP256K1_HALF_ORDER[..] {
        return None;
    }

    let message = prefixed_digest(digest);
    let pubkey = secp256k1_recover(&message, recovery_id, &signature[..64]).ok()?;

    let hash = keccak::hash(&pubkey.to_bytes()).to_bytes();
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}

/// True iff `signature` over `digest` recovers exactly `expected`.
pub fn verify(digest: &[u8; 32], signature: &[u8], expected: &[u8; 20]) -> bool {
    recover_signer(digest, signature) == Some(*expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{sign_digest, test_keypair, to_high_s};

    #[test]
    fn claim_digest_is_field_sensitive() {
        let claimant = Pubkey::new_unique();
        let digest = claim_digest(&claimant, 5, 2, 1_700_000_000);

        assert_eq!(digest, claim_digest(&claimant, 5, 2, 1_700_000_000));
        assert_ne!(digest, claim_digest(&claimant, 4, 2, 1_700_000_000));
        assert_ne!(digest, claim_digest(&claimant, 5, 3, 1_700_000_000));
        assert_ne!(digest, claim_digest(&claimant, 5, 2, 1_700_000_001));
        assert_ne!(digest, claim_digest(&Pubkey::new_unique(), 5, 2, 1_700_000_000));
    }

    #[test]
    fn recovers_the_signing_address() {
        let (secret, address) = test_keypair(7);
        let digest = claim_digest(&Pubkey::new_unique(), 5, 2, 1_700_000_000);
        let sig = sign_digest(&secret, &digest);

        assert_eq!(recover_signer(&digest, &sig), Some(address));
        assert!(verify(&digest, &sig, &address));
    }

    #[test]
    fn accepts_ethereum_style_recovery_ids() {
        let (secret, address) = test_keypair(7);
        let digest = claim_digest(&Pubkey::new_unique(), 5, 2, 1_700_000_000);
        let mut sig = sign_digest(&secret, &digest);

        sig[64] += 27;
        assert!(verify(&digest, &sig, &address));
    }

    #[test]
    fn rejects_non_trusted_signer() {
        let (secret, _) = test_keypair(7);
        let (_, other_address) = test_keypair(8);
        let digest = claim_digest(&Pubkey::new_unique(), 5, 2, 1_700_000_000);
        let sig = sign_digest(&secret, &digest);

        assert!(!verify(&digest, &sig, &other_address));
    }

    #[test]
    fn rejects_signature_over_altered_fields() {
        let (secret, address) = test_keypair(7);
        let claimant = Pubkey::new_unique();
        let sig = sign_digest(&secret, &claim_digest(&claimant, 5, 2, 1_700_000_000));

        // Amount and unlock time changed after signing.
        assert!(!verify(&claim_digest(&claimant, 4, 2, 1_700_000_000), &sig, &address));
        assert!(!verify(&claim_digest(&claimant, 5, 7, 1_700_000_000), &sig, &address));
        assert!(!verify(&claim_digest(&claimant, 5, 2, 1_800_000_000), &sig, &address));
    }

    #[test]
    fn rejects_malformed_signatures() {
        let (secret, address) = test_keypair(7);
        let digest = claim_digest(&Pubkey::new_unique(), 5, 2, 1_700_000_000);
        let sig = sign_digest(&secret, &digest);

        assert_eq!(recover_signer(&digest, &sig[..64]), None);
        assert_eq!(recover_signer(&digest, &[]), None);

        let mut bad_recovery = sig;
        bad_recovery[64] = 5;
        assert_eq!(recover_signer(&digest, &bad_recovery), None);
        assert!(!verify(&digest, &bad_recovery, &address));
    }

    #[test]
    fn rejects_high_s_form() {
        let (secret, address) = test_keypair(7);
        let digest = claim_digest(&Pubkey::new_unique(), 5, 2, 1_700_000_000);
        let sig = sign_digest(&secret, &digest);

        let malleated = to_high_s(&sig);
        assert_eq!(recover_signer(&digest, &malleated), None);
        assert!(!verify(&digest, &malleated, &address));
    }
}
