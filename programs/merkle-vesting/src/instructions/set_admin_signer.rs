use anchor_lang::prelude::*;

use crate::errors::VestingError;
use crate::events::AdminSignerUpdated;
use crate::state::VestingState;

#[derive(Accounts)]
pub struct SetAdminSigner<'info> {
    #[account(mut, has_one = admin @ VestingError::Unauthorized)]
    pub vesting_state: Account<'info, VestingState>,

    pub admin: Signer<'info>,
}

/// Replaces the trusted co-signing key wholesale. Signatures from the
/// previous key stop authorizing claims from this point on.
pub fn handle_set_admin_signer(ctx: Context<SetAdminSigner>, new_signer: [u8; 20]) -> Result<()> {
    let vesting_state = &mut ctx.accounts.vesting_state;

    let previous_signer = vesting_state.trust.admin_signer;
    vesting_state.trust.admin_signer = new_signer;

    emit!(AdminSignerUpdated {
        previous_signer,
        new_signer,
    });

    Ok(())
}
