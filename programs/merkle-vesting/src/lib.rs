//! Token-vesting claim program.
//!
//! Allocations `(claimant, total_amount, unlock_time)` are committed
//! off-chain as a sorted-pair keccak256 Merkle root. A claimant either
//! proves membership with a Merkle proof or presents an out-of-band
//! ECDSA authorization from the trusted admin signer. The program
//! enforces that each allocation is claimed at most once, never before
//! its cliff, and never above its committed amount, then pays out from
//! an escrow token account it controls.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod signature;
pub mod state;

#[cfg(test)]
mod testutil;

use instructions::*;
use state::CliffPolicy;

declare_id!("2aiCG27j5Q9NoyhqstPx5V4pJ5hiHf2dJXw32XCpsLqp");

#[program]
pub mod merkle_vesting {

    use super::*;

    /// Creates the vesting state and its escrow, records the caller as
    /// admin, and funds the escrow from the caller's token wallet.
    pub fn initialize(
        ctx: Context<Initialize>,
        merkle_root: [u8; 32],
        admin_signer: [u8; 20],
        cliff_policy: CliffPolicy,
        fund_amount: u64,
    ) -> Result<()> {
        handle_initialize(ctx, merkle_root, admin_signer, cliff_policy, fund_amount)
    }

    /// Claims `amount` of an allocation committed at
    /// `(caller, total_amount, unlock_time)`, proving membership
    /// against the current Merkle root.
    pub fn claim(
        ctx: Context<Claim>,
        amount: u64,
        total_amount: u64,
        unlock_time: i64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim(ctx, amount, total_amount, unlock_time, proof)
    }

    /// Claims `amount` under an out-of-band authorization signed by the
    /// trusted admin key over the full claim parameters.
    pub fn claim_by_admin_signature(
        ctx: Context<ClaimByAdminSignature>,
        amount: u64,
        total_amount: u64,
        unlock_time: i64,
        signature: Vec<u8>,
    ) -> Result<()> {
        handle_claim_by_admin_signature(ctx, amount, total_amount, unlock_time, signature)
    }

    /// Admin only: replaces the trusted allocation-table root.
    pub fn set_new_merkle_root(ctx: Context<SetMerkleRoot>, new_root: [u8; 32]) -> Result<()> {
        handle_set_merkle_root(ctx, new_root)
    }

    /// Admin only: replaces the trusted co-signing key.
    pub fn set_new_admin_signer(ctx: Context<SetAdminSigner>, new_signer: [u8; 20]) -> Result<()> {
        handle_set_admin_signer(ctx, new_signer)
    }
}
