use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::ContractOwnerClaimed;
use crate::state::ContractConfig;

#[derive(Accounts)]
pub struct ClaimContractOwner<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,

    pub granted_admin: Signer<'info>,
}

impl<'info> ClaimContractOwner<'info> {
    pub fn claim_ownership(&mut self) -> Result<()> {
        let new_admin = self.granted_admin.key();
        let previous_admin = self.config.claim_owner(&new_admin)?;

        emit!(ContractOwnerClaimed {
            previous_admin,
            new_admin,
        });
        Ok(())
    }
}
