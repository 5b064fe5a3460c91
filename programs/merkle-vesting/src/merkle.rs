//! Sorted-pair Merkle proof verification.
//!
//! Notes on construction:
//! - Pairs are hashed in sorted order (lexicographically by 32-byte value),
//!   so proofs carry no left/right position information.
//! - Leaves are `claimant_pubkey (32 bytes) || total_amount (u64 LE) ||
//!   unlock_time (i64 LE)`, hashed once with keccak256 before folding.
//!   Off-chain tree builders must use the exact same byte order and the
//!   same pair-sorting rule or every proof fails verification.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

/// Hashes an allocation into its leaf value.
///
/// Leaf hashing is mandatory: raw leaf bytes are never folded directly,
/// so a proof node can never be passed off as a leaf.
pub fn hash_leaf(claimant: &Pubkey, total_amount: u64, unlock_time: i64) -> [u8; 32] {
    keccak::hashv(&[
        claimant.as_ref(),
        &total_amount.to_le_bytes(),
        &unlock_time.to_le_bytes(),
    ])
    .to_bytes()
}

/// Computes keccak256 hash of two concatenated nodes.
pub fn hash_nodes(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    keccak::hashv(&[left, right]).to_bytes()
}

/// Verifies a Merkle proof for the given leaf hash against `root`.
///
/// Folds the proof into the leaf pairwise, ordering each pair before
/// hashing. Total and side-effect free: a tampered, truncated or
/// non-member proof folds to a different hash and returns false.
pub fn verify_proof(leaf: [u8; 32], proof: &[[u8; 32]], root: [u8; 32]) -> bool {
    let mut computed = leaf;
    for node in proof {
        computed = if computed <= *node {
            hash_nodes(&computed, node)
        } else {
            hash_nodes(node, &computed)
        };
    }
    computed == root
}
