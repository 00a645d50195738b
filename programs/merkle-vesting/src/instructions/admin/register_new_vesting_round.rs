use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::constants::{CONFIG_SEED, VESTING_ROUND_SEED};
use crate::errors::VestingError;
use crate::events::VestingRoundRegistered;
use crate::state::{ContractConfig, RoundParams, VestingRound};

#[derive(Accounts)]
pub struct RegisterNewVestingRound<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,

    #[account(
        init,
        payer = admin,
        space = 8 + VestingRound::INIT_SPACE,
        seeds = [VESTING_ROUND_SEED, &config.upcoming_stage().to_le_bytes()],
        bump
    )]
    pub vesting_round: Account<'info, VestingRound>,

    #[account(
        constraint = *token_mint.to_account_info().owner == token_program.key()
            @ VestingError::InvalidTokenProgram
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterNewVestingRound<'info> {
    pub fn register(
        &mut self,
        owner: Pubkey,
        merkle_root: [u8; 32],
        distribution: Option<Pubkey>,
        bumps: &RegisterNewVestingRoundBumps,
    ) -> Result<()> {
        let token_mint = self.token_mint.key();
        let token_program = self.token_program.key();
        // rounds of one owner and mint share this account and the config PDA's approval on it
        let distribution = distribution.unwrap_or_else(|| {
            get_associated_token_address_with_program_id(&owner, &token_mint, &token_program)
        });

        let admin = self.admin.key();
        let created_at = Clock::get()?.unix_timestamp;
        let round = VestingRound::open(
            &mut self.config,
            &admin,
            RoundParams {
                owner,
                token_mint,
                token_program,
                distribution,
                merkle_root,
            },
            created_at,
            bumps.vesting_round,
        )?;
        let stage = round.stage;
        self.vesting_round.set_inner(round);

        msg!("Registered vesting round {}", stage);
        emit!(VestingRoundRegistered {
            stage,
            owner,
            token_mint,
            distribution,
            merkle_root,
            created_at,
        });
        Ok(())
    }
}
