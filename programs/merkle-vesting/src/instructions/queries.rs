use anchor_lang::prelude::*;

use crate::constants::{CLAIM_RECORD_SEED, CONFIG_SEED, VESTING_ROUND_SEED};
use crate::state::{ClaimRecord, ContractConfig, VestingRound, VestingRoundView};

#[derive(Accounts)]
pub struct ReadConfig<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,
}

#[derive(Accounts)]
#[instruction(stage: u64)]
pub struct GetConfig<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,

    /// CHECK: PDA of the requested stage, empty when it was never registered.
    #[account(seeds = [VESTING_ROUND_SEED, &stage.to_le_bytes()], bump)]
    pub vesting_round: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(stage: u64, claimant: Pubkey)]
pub struct GetClaimStatus<'info> {
    #[account(seeds = [CLAIM_RECORD_SEED, &stage.to_le_bytes(), claimant.as_ref()], bump)]
    pub claim_record: Option<Account<'info, ClaimRecord>>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimStatusView {
    pub stage: u64,
    pub claimant: Pubkey,
    pub claimed_amount: u64,
    pub last_claimed_at: i64,
}

impl ClaimStatusView {
    /// Status of a claimant; an address that never claimed reports zero.
    pub fn of(stage: u64, claimant: Pubkey, record: Option<&ClaimRecord>) -> Self {
        Self {
            stage,
            claimant,
            claimed_amount: record.map_or(0, |r| r.claimed_amount),
            last_claimed_at: record.map_or(0, |r| r.last_claimed_at),
        }
    }
}

impl<'info> GetConfig<'info> {
    pub fn round_view(&self, stage: u64) -> Result<VestingRoundView> {
        let round = VestingRound::try_load(&self.vesting_round.to_account_info())?;
        VestingRoundView::lookup(&self.config, round.as_ref(), stage)
    }
}

impl<'info> GetClaimStatus<'info> {
    pub fn status(&self, stage: u64, claimant: Pubkey) -> ClaimStatusView {
        ClaimStatusView::of(stage, claimant, self.claim_record.as_deref())
    }
}
