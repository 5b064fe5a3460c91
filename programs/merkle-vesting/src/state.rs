use anchor_lang::prelude::*;

use crate::errors::VestingError;
use crate::{merkle, signature};

pub const VESTING_STATE_SEED: &[u8] = b"vesting_state";
pub const ESCROW_WALLET_SEED: &[u8] = b"escrow_wallet";
pub const CLAIM_STATUS_SEED: &[u8] = b"claim_status";

/// The two mutable trust anchors, grouped so the admin rotation entry
/// points replace each one wholesale and nothing else touches them.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrustState {
    /// Root committing to the current allocation table.
    pub merkle_root: [u8; 32],
    /// Ethereum-style address of the co-signing admin key.
    pub admin_signer: [u8; 20],
}

/// When a committed allocation becomes claimable. Chosen at
/// initialization; `PerLeafOffset` is the production default (each
/// leaf's unlock time plus a fixed vesting period).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliffPolicy {
    /// One program-wide cliff timestamp.
    FixedAnchor { timestamp: i64 },
    /// Cliff is the leaf's unlock time plus a fixed offset in seconds.
    PerLeafOffset { offset: i64 },
}

impl CliffPolicy {
    pub fn cliff_elapsed(&self, unlock_time: i64, now: i64) -> bool {
        match *self {
            CliffPolicy::FixedAnchor { timestamp } => now >= timestamp,
            CliffPolicy::PerLeafOffset { offset } => now >= unlock_time.saturating_add(offset),
        }
    }
}

/// Program state, one instance per vested token mint.
/// Derivation: `["vesting_state", token_mint]`.
#[account]
pub struct VestingState {
    /// Bump seed, saved to avoid recomputation when signing transfers.
    pub bump: u8,
    /// Administrator; the only identity allowed to rotate trust anchors.
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    /// Escrow token account the claims are paid out of.
    pub escrow_wallet: Pubkey,
    pub trust: TrustState,
    pub cliff_policy: CliffPolicy,
    /// Total amount transferred out across all settled claims.
    pub total_claimed: u64,
}

impl VestingState {
    pub const LEN: usize = 8 + std::mem::size_of::<Self>();

    /// Authorization gates for the Merkle claim path, in order:
    /// cliff, amount, proof. The ledger settle and the transfer happen
    /// in the instruction handler, after these gates pass.
    pub fn authorize_merkle_claim(
        &self,
        claimant: &Pubkey,
        amount: u64,
        total_amount: u64,
        unlock_time: i64,
        proof: &[[u8; 32]],
        now: i64,
    ) -> Result<()> {
        require!(
            self.cliff_policy.cliff_elapsed(unlock_time, now),
            VestingError::CliffNotElapsed
        );
        require!(amount <= total_amount, VestingError::InsufficientAmount);

        let leaf = merkle::hash_leaf(claimant, total_amount, unlock_time);
        require!(
            merkle::verify_proof(leaf, proof, self.trust.merkle_root),
            VestingError::InvalidProof
        );
        Ok(())
    }

    /// Authorization gates for the admin-signature claim path: same
    /// order as the Merkle path with the proof check replaced by
    /// signer recovery against the trusted admin signer.
    pub fn authorize_signature_claim(
        &self,
        claimant: &Pubkey,
        amount: u64,
        total_amount: u64,
        unlock_time: i64,
        sig: &[u8],
        now: i64,
    ) -> Result<()> {
        require!(
            self.cliff_policy.cliff_elapsed(unlock_time, now),
            VestingError::CliffNotElapsed
        );
        require!(amount <= total_amount, VestingError::InsufficientAmount);

        let digest = signature::claim_digest(claimant, total_amount, amount, unlock_time);
        require!(
            signature::verify(&digest, sig, &self.trust.admin_signer),
            VestingError::InvalidSignature
        );
        Ok(())
    }
}

/// Per-claimant settlement marker.
/// Derivation: `["claim_status", vesting_state, claimant]`.
///
/// Created lazily on first claim. The `claimed` flag transitions
/// unclaimed -> claimed exactly once and the account is never closed;
/// permanence is the double-spend guarantee.
#[account]
#[derive(Default)]
pub struct ClaimStatus {
    pub bump: u8,
    pub claimed: bool,
    /// Amount transferred when the claim settled.
    pub amount: u64,
    /// Timestamp the claim settled at.
    pub claimed_at: i64,
}

impl ClaimStatus {
    pub const LEN: usize = 8 + std::mem::size_of::<Self>();

    /// Check-and-settle: fails if this claimant already settled,
    /// otherwise marks the claimant settled. Handlers call this
    /// strictly before the transfer CPI, so a re-entering callee finds
    /// the flag already set and transaction atomicity unwinds the flag
    /// if the transfer fails.
    pub fn settle(&mut self, amount: u64, now: i64) -> Result<()> {
        require!(!self.claimed, VestingError::AlreadyClaimed);
        self.claimed = true;
        self.amount = amount;
        self.claimed_at = now;
        Ok(())
    }
}
