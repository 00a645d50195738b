use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::state::{ContractConfig, ContractStatus};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + ContractConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, ContractConfig>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        owner: Option<Pubkey>,
        contract_status: Option<ContractStatus>,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        let payer = self.payer.key();

        self.config.set_inner(ContractConfig {
            contract_owner: owner.unwrap_or(payer),
            granted_owner: None,
            current_stage: 0,
            status: contract_status.unwrap_or_default(),
            bump: bumps.config,
        });

        msg!("Contract was initialized by {}", payer);
        Ok(())
    }
}
