use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::VestingError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum ContractStatus {
    #[default]
    NormalRun,
    StopAll,
}

/// Program-wide admin state, stored once under the `config` PDA. The same
/// PDA is the token delegate that pays out every claim.
#[account]
#[derive(Debug, InitSpace)]
pub struct ContractConfig {
    pub contract_owner: Pubkey,
    /// Address nominated by the owner, waiting to claim ownership.
    pub granted_owner: Option<Pubkey>,
    /// Highest registered stage; 0 until the first round exists.
    pub current_stage: u64,
    pub status: ContractStatus,
    pub bump: u8,
}

impl ContractConfig {
    pub fn signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
        [CONFIG_SEED, bump]
    }

    pub fn is_admin(&self, account: &Pubkey) -> bool {
        &self.contract_owner == account
    }

    pub fn is_granted_admin(&self, account: &Pubkey) -> bool {
        self.granted_owner.as_ref() == Some(account)
    }

    pub fn check_admin(&self, account: &Pubkey) -> Result<()> {
        if !self.is_admin(account) {
            msg!("This is an admin command. Admin commands can only be run from admin address");
            return err!(VestingError::Unauthorized);
        }
        Ok(())
    }

    pub fn check_granted_admin(&self, account: &Pubkey) -> Result<()> {
        if !self.is_granted_admin(account) {
            msg!("This is a granted admin command. Granted admin commands can only be run from granted admin address");
            return err!(VestingError::Unauthorized);
        }
        Ok(())
    }

    pub fn ensure_running(&self) -> Result<()> {
        require!(
            self.status == ContractStatus::NormalRun,
            VestingError::ContractStopped
        );
        Ok(())
    }

    /// Stage number the next registered round will get. Used for PDA
    /// derivation before the stage is actually taken.
    pub fn upcoming_stage(&self) -> u64 {
        self.current_stage.saturating_add(1)
    }

    pub fn has_stage(&self, stage: u64) -> bool {
        stage >= 1 && stage <= self.current_stage
    }

    pub fn grant_owner(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<()> {
        self.ensure_running()?;
        self.check_admin(caller)?;
        self.granted_owner = Some(new_admin);
        Ok(())
    }

    /// Completes the two-step handoff and returns the previous owner.
    pub fn claim_owner(&mut self, caller: &Pubkey) -> Result<Pubkey> {
        self.ensure_running()?;
        self.check_granted_admin(caller)?;
        let previous = self.contract_owner;
        self.contract_owner = *caller;
        self.granted_owner = None;
        Ok(previous)
    }

    /// Drops any pending grant. Revoking with nothing granted is a no-op.
    pub fn revoke_grant(&mut self, caller: &Pubkey) -> Result<Option<Pubkey>> {
        self.ensure_running()?;
        self.check_admin(caller)?;
        Ok(self.granted_owner.take())
    }

    pub fn set_status(&mut self, caller: &Pubkey, status: ContractStatus) -> Result<()> {
        self.check_admin(caller)?;
        self.status = status;
        Ok(())
    }

    /// Reserves the next stage number for a new round. Callers check the
    /// admin and the contract status first.
    pub fn advance_stage(&mut self) -> Result<u64> {
        let stage = self
            .current_stage
            .checked_add(1)
            .ok_or(VestingError::MathOverflow)?;
        self.current_stage = stage;
        Ok(stage)
    }
}
