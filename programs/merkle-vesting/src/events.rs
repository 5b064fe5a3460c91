use anchor_lang::prelude::*;

#[event]
pub struct TokensClaimed {
    pub claimant: Pubkey,
    pub amount: u64,
}

#[event]
pub struct MerkleRootUpdated {
    pub previous_root: [u8; 32],
    pub new_root: [u8; 32],
}

#[event]
pub struct AdminSignerUpdated {
    pub previous_signer: [u8; 20],
    pub new_signer: [u8; 20],
}
