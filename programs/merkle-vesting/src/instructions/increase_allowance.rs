use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Approve, TokenAccount, TokenInterface};

use crate::allowance::Approval;
use crate::constants::{CONFIG_SEED, VESTING_ROUND_SEED};
use crate::errors::VestingError;
use crate::events::AllowanceIncreased;
use crate::state::{ContractConfig, VestingRound};

#[derive(Accounts)]
#[instruction(stage: u64)]
pub struct IncreaseAllowance<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,

    #[account(
        mut,
        seeds = [VESTING_ROUND_SEED, &stage.to_le_bytes()],
        bump = vesting_round.bump
    )]
    pub vesting_round: Account<'info, VestingRound>,

    #[account(
        mut,
        constraint = distribution.key() == vesting_round.distribution @ VestingError::InvalidDistribution,
        constraint = distribution.owner == funder.key() @ VestingError::Unauthorized,
    )]
    pub distribution: InterfaceAccount<'info, TokenAccount>,

    pub funder: Signer<'info>,

    #[account(
        constraint = token_program.key() == vesting_round.token_program @ VestingError::InvalidTokenProgram
    )]
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> IncreaseAllowance<'info> {
    /// Approves the `config` PDA for `amount` more and earmarks it for this round.
    pub fn increase(&mut self, stage: u64, amount: u64) -> Result<()> {
        self.config.ensure_running()?;

        let delegate = self.config.key();
        let approved = Approval::of(&self.distribution).increased(&delegate, amount)?;
        let round_allowance = self.vesting_round.fund(amount)?;

        let cpi_ctx = CpiContext::new(
            self.token_program.to_account_info(),
            Approve {
                to: self.distribution.to_account_info(),
                delegate: self.config.to_account_info(),
                authority: self.funder.to_account_info(),
            },
        );
        token_interface::approve(cpi_ctx, approved)?;

        emit!(AllowanceIncreased {
            stage,
            distribution: self.distribution.key(),
            delegate,
            approved,
            round_allowance,
        });
        Ok(())
    }
}
