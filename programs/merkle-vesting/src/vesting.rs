use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::VestingError;

/// One whitelist line. Never stored on chain: the claimant resubmits it and
/// the round's merkle root vouches for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WhitelistEntry {
    pub address: Pubkey,
    pub stage: u64,
    /// Total entitlement in token base units.
    pub amount: u64,
    /// Share of `amount` unlocked at `start_at`, in basis points.
    pub tge: u16,
    pub start_at: i64,
    /// Seconds after `start_at` before linear vesting begins.
    pub cliff: u64,
    /// Length of the linear phase in seconds, counted from the end of the cliff.
    pub duration: u64,
}

impl WhitelistEntry {
    pub fn tge_amount(&self) -> Result<u64> {
        require!(
            u64::from(self.tge) <= BPS_DENOMINATOR,
            VestingError::InvalidTge
        );
        let unlocked = u128::from(self.amount)
            .checked_mul(u128::from(self.tge))
            .ok_or(VestingError::MathOverflow)?
            / u128::from(BPS_DENOMINATOR);
        u64::try_from(unlocked).map_err(|_| error!(VestingError::MathOverflow))
    }

    pub fn cliff_end(&self) -> Result<i64> {
        offset(self.start_at, self.cliff)
    }

    pub fn vesting_end(&self) -> Result<i64> {
        offset(self.cliff_end()?, self.duration)
    }

    /// Total amount unlocked at `now`, claimed or not.
    pub fn unlocked_amount(&self, now: i64) -> Result<u64> {
        if now < self.start_at {
            return Ok(0);
        }

        let tge_amount = self.tge_amount()?;
        let cliff_end = self.cliff_end()?;
        if now < cliff_end {
            return Ok(tge_amount);
        }

        let elapsed = now.abs_diff(cliff_end);
        if self.duration == 0 || elapsed >= self.duration {
            return Ok(self.amount);
        }

        let remaining = self
            .amount
            .checked_sub(tge_amount)
            .ok_or(VestingError::MathOverflow)?;
        let linear = u128::from(remaining)
            .checked_mul(u128::from(elapsed))
            .ok_or(VestingError::MathOverflow)?
            / u128::from(self.duration);
        let linear = u64::try_from(linear).map_err(|_| error!(VestingError::MathOverflow))?;

        tge_amount
            .checked_add(linear)
            .map(|unlocked| unlocked.min(self.amount))
            .ok_or_else(|| error!(VestingError::MathOverflow))
    }
}

fn offset(from: i64, seconds: u64) -> Result<i64> {
    i64::try_from(seconds)
        .ok()
        .and_then(|seconds| from.checked_add(seconds))
        .ok_or_else(|| error!(VestingError::MathOverflow))
}
