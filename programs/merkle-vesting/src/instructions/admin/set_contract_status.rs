use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::ContractStatusChanged;
use crate::state::{ContractConfig, ContractStatus};

#[derive(Accounts)]
pub struct SetContractStatus<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,

    pub admin: Signer<'info>,
}

impl<'info> SetContractStatus<'info> {
    pub fn set_status(&mut self, level: ContractStatus) -> Result<()> {
        let admin = self.admin.key();
        self.config.set_status(&admin, level)?;

        emit!(ContractStatusChanged {
            admin,
            status: level,
        });
        Ok(())
    }
}
