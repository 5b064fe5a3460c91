use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::events::TokensClaimed;
use crate::state::{
    ClaimStatus, VestingState, CLAIM_STATUS_SEED, ESCROW_WALLET_SEED, VESTING_STATE_SEED,
};

#[derive(Accounts)]
pub struct ClaimByAdminSignature<'info> {
    #[account(
        mut,
        seeds = [VESTING_STATE_SEED, token_mint.key().as_ref()],
        bump = vesting_state.bump,
        has_one = token_mint,
        has_one = escrow_wallet,
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [ESCROW_WALLET_SEED, token_mint.key().as_ref()],
        bump,
    )]
    pub escrow_wallet: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = sender,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_STATUS_SEED, vesting_state.key().as_ref(), sender.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    #[account(
        init_if_needed,
        payer = sender,
        associated_token::mint = token_mint,
        associated_token::authority = sender
    )]
    pub wallet_to_deposit_to: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}

pub fn handle_claim_by_admin_signature(
    ctx: Context<ClaimByAdminSignature>,
    amount: u64,
    total_amount: u64,
    unlock_time: i64,
    signature: Vec<u8>,
) -> Result<()> {
    let claimant = ctx.accounts.sender.key();
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.vesting_state.authorize_signature_claim(
        &claimant,
        amount,
        total_amount,
        unlock_time,
        &signature,
        now,
    )?;

    // Settle strictly before the transfer CPI.
    let claim_status = &mut ctx.accounts.claim_status;
    claim_status.bump = ctx.bumps.claim_status;
    claim_status.settle(amount, now)?;

    let vesting_state = &mut ctx.accounts.vesting_state;
    vesting_state.total_claimed = vesting_state.total_claimed.saturating_add(amount);

    let token_mint_key = ctx.accounts.token_mint.key();
    let seeds = &[
        VESTING_STATE_SEED,
        token_mint_key.as_ref(),
        &[ctx.accounts.vesting_state.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let transfer_instruction = Transfer {
        from: ctx.accounts.escrow_wallet.to_account_info(),
        to: ctx.accounts.wallet_to_deposit_to.to_account_info(),
        authority: ctx.accounts.vesting_state.to_account_info(),
    };

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        transfer_instruction,
        signer_seeds,
    );

    token::transfer(cpi_ctx, amount)?;

    emit!(TokensClaimed { claimant, amount });

    Ok(())
}
