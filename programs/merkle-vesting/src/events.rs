use anchor_lang::prelude::*;

use crate::state::ContractStatus;

#[event]
pub struct VestingRoundRegistered {
    pub stage: u64,
    pub owner: Pubkey,
    pub token_mint: Pubkey,
    pub distribution: Pubkey,
    pub merkle_root: [u8; 32],
    pub created_at: i64,
}

#[event]
pub struct ContractOwnerGranted {
    pub admin: Pubkey,
    pub granted_admin: Pubkey,
    pub created_at: i64,
}

#[event]
pub struct ContractOwnerClaimed {
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct GrantedContractOwnerRevoked {
    pub admin: Pubkey,
    pub revoked: Option<Pubkey>,
}

#[event]
pub struct ContractStatusChanged {
    pub admin: Pubkey,
    pub status: ContractStatus,
}

#[event]
pub struct AllowanceIncreased {
    pub stage: u64,
    pub distribution: Pubkey,
    pub delegate: Pubkey,
    /// Total approval the distribution account now grants the delegate.
    pub approved: u64,
    /// Part of the approval earmarked for this round.
    pub round_allowance: u64,
}

#[event]
pub struct TokensClaimed {
    pub stage: u64,
    pub claimant: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
    pub claimed_at: i64,
}
