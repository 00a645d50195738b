use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::ContractOwnerGranted;
use crate::state::ContractConfig;

#[derive(Accounts)]
pub struct GrantContractOwner<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,

    pub admin: Signer<'info>,
}

impl<'info> GrantContractOwner<'info> {
    pub fn grant(&mut self, new_admin: Pubkey) -> Result<()> {
        let admin = self.admin.key();
        self.config.grant_owner(&admin, new_admin)?;

        emit!(ContractOwnerGranted {
            admin,
            granted_admin: new_admin,
            created_at: Clock::get()?.unix_timestamp,
        });
        Ok(())
    }
}
