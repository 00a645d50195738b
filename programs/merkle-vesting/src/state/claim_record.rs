use anchor_lang::prelude::*;

use crate::errors::VestingError;

/// Cumulative claims of one address in one round.
/// Seeds: [b"claim_record", stage.to_le_bytes(), claimant]
#[account]
#[derive(Debug, Default, InitSpace)]
pub struct ClaimRecord {
    pub stage: u64,
    pub claimant: Pubkey,
    pub claimed_amount: u64,
    pub last_claimed_at: i64,
    pub bump: u8,
}

impl ClaimRecord {
    pub fn claimable(&self, unlocked: u64) -> Result<u64> {
        let claimable = unlocked.saturating_sub(self.claimed_amount);
        require!(claimable > 0, VestingError::NothingToClaim);
        Ok(claimable)
    }

    pub fn record(&mut self, amount: u64, now: i64) -> Result<()> {
        self.claimed_amount = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        self.last_claimed_at = now;
        Ok(())
    }
}
