use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::events::GrantedContractOwnerRevoked;
use crate::state::ContractConfig;

#[derive(Accounts)]
pub struct RevokeGrantedContractOwner<'info> {
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,

    pub admin: Signer<'info>,
}

impl<'info> RevokeGrantedContractOwner<'info> {
    pub fn revoke(&mut self) -> Result<()> {
        let admin = self.admin.key();
        let revoked = self.config.revoke_grant(&admin)?;

        if revoked.is_none() {
            msg!("No granted contract owner to revoke");
        }

        emit!(GrantedContractOwnerRevoked { admin, revoked });
        Ok(())
    }
}
