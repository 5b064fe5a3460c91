use anchor_lang::prelude::*;

use crate::errors::VestingError;
use crate::events::MerkleRootUpdated;
use crate::state::VestingState;

#[derive(Accounts)]
pub struct SetMerkleRoot<'info> {
    #[account(mut, has_one = admin @ VestingError::Unauthorized)]
    pub vesting_state: Account<'info, VestingState>,

    pub admin: Signer<'info>,
}

/// Replaces the trusted allocation-table root wholesale. Pending
/// proofs built against the prior tree stop verifying; the claim
/// ledger is untouched, so settled claimants stay settled.
pub fn handle_set_merkle_root(ctx: Context<SetMerkleRoot>, new_root: [u8; 32]) -> Result<()> {
    let vesting_state = &mut ctx.accounts.vesting_state;

    let previous_root = vesting_state.trust.merkle_root;
    vesting_state.trust.merkle_root = new_root;

    emit!(MerkleRootUpdated {
        previous_root,
        new_root,
    });

    Ok(())
}
