//! Test fixtures: a sorted-pair tree builder mirroring the on-chain
//! verifier, and secp256k1 signing helpers for the admin path.

use anchor_lang::solana_program::keccak;
use libsecp256k1::{Message, PublicKey, SecretKey};

use crate::merkle::hash_nodes;
use crate::signature::prefixed_digest;

const SECP256K1_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

fn next_level(level: &[[u8; 32]]) -> Vec<[u8; 32]> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [a, b] => {
                if a <= b {
                    hash_nodes(a, b)
                } else {
                    hash_nodes(b, a)
                }
            }
            // Odd node is carried up unchanged.
            [a] => *a,
            _ => unreachable!(),
        })
        .collect()
}

pub fn build_root(leaves: &[[u8; 32]]) -> [u8; 32] {
    assert!(!leaves.is_empty());
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        level = next_level(&level);
    }
    level[0]
}

pub fn proof_for(leaves: &[[u8; 32]], mut index: usize) -> Vec<[u8; 32]> {
    assert!(index < leaves.len());
    let mut proof = Vec::new();
    let mut level = leaves.to_vec();
    while level.len() > 1 {
        let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
        if sibling < level.len() {
            proof.push(level[sibling]);
        }
        index /= 2;
        level = next_level(&level);
    }
    proof
}

/// Deterministic secp256k1 keypair and its Ethereum-style address.
pub fn test_keypair(seed: u8) -> (SecretKey, [u8; 20]) {
    assert_ne!(seed, 0);
    let secret = SecretKey::parse(&[seed; 32]).unwrap();
    let public = PublicKey::from_secret_key(&secret);

    // Uncompressed encoding is 0x04 || x || y; the address hashes x || y.
    let encoded = public.serialize();
    let hash = keccak::hash(&encoded[1..]).to_bytes();
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    (secret, address)
}

/// Signs a claim digest through the personal-message transform,
/// returning `r || s || v` with `v` in {0, 1}.
pub fn sign_digest(secret: &SecretKey, digest: &[u8; 32]) -> [u8; 65] {
    let prefixed = prefixed_digest(digest);
    let (sig, recovery_id) = libsecp256k1::sign(&Message::parse(&prefixed), secret);

    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&sig.serialize());
    out[64] = recovery_id.serialize();
    out
}

/// Rewrites a canonical signature into its malleable high-s twin:
/// `s' = n - s`, recovery id flipped. Recovers the same key under a
/// verifier that accepts both forms; ours must reject it.
pub fn to_high_s(sig: &[u8; 65]) -> [u8; 65] {
    let mut out = *sig;
    let mut borrow = 0i16;
    for i in (0..32).rev() {
        let mut diff = SECP256K1_ORDER[i] as i16 - sig[32 + i] as i16 - borrow;
        if diff < 0 {
            diff += 256;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out[32 + i] = diff as u8;
    }
    out[64] ^= 1;
    out
}
