use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::state::{CliffPolicy, TrustState, VestingState, ESCROW_WALLET_SEED, VESTING_STATE_SEED};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = sender,
        space = VestingState::LEN,
        seeds = [VESTING_STATE_SEED, token_mint.key().as_ref()],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = sender,
        seeds = [ESCROW_WALLET_SEED, token_mint.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = vesting_state,
    )]
    pub escrow_wallet: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = wallet_to_withdraw_from.owner == sender.key(),
        constraint = wallet_to_withdraw_from.mint == token_mint.key()
    )]
    pub wallet_to_withdraw_from: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub sender: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_initialize(
    ctx: Context<Initialize>,
    merkle_root: [u8; 32],
    admin_signer: [u8; 20],
    cliff_policy: CliffPolicy,
    fund_amount: u64,
) -> Result<()> {
    let vesting_state = &mut ctx.accounts.vesting_state;

    vesting_state.bump = ctx.bumps.vesting_state;
    vesting_state.admin = ctx.accounts.sender.key();
    vesting_state.token_mint = ctx.accounts.token_mint.key();
    vesting_state.escrow_wallet = ctx.accounts.escrow_wallet.key();
    vesting_state.trust = TrustState {
        merkle_root,
        admin_signer,
    };
    vesting_state.cliff_policy = cliff_policy;
    vesting_state.total_claimed = 0;

    let transfer_instruction = Transfer {
        from: ctx.accounts.wallet_to_withdraw_from.to_account_info(),
        to: ctx.accounts.escrow_wallet.to_account_info(),
        authority: ctx.accounts.sender.to_account_info(),
    };

    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_instruction,
    );

    token::transfer(cpi_ctx, fund_amount)?;

    Ok(())
}
