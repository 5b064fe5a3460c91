use anchor_lang::prelude::*;

#[error_code]
pub enum VestingError {
    #[msg("Cliff period didn't end")]
    CliffNotElapsed,
    #[msg("Insufficient amount")]
    InsufficientAmount,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Invalid signature")]
    InvalidSignature,
    #[msg("Allocation has already been claimed")]
    AlreadyClaimed,
    #[msg("Caller is not the vesting admin")]
    Unauthorized,
}
