//! Token accounts carry a single delegate, so every distribution account
//! approves the `config` PDA and nothing else. The approval is shared by all
//! rounds paid from that account; each round's share of it is booked in
//! `VestingRound::allowance`.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token_interface::TokenAccount;

use crate::errors::VestingError;

/// Delegate state of a distribution account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Approval {
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
}

impl Approval {
    pub fn of(account: &TokenAccount) -> Self {
        let delegate = match account.delegate {
            COption::Some(delegate) => Some(delegate),
            COption::None => None,
        };
        Self {
            delegate,
            delegated_amount: account.delegated_amount,
        }
    }

    /// Approval after raising it by `amount` for `spender`. A spent approval
    /// held by someone else is replaced; a live one is refused.
    pub fn increased(&self, spender: &Pubkey, amount: u64) -> Result<u64> {
        match self.delegate {
            Some(delegate) if delegate == *spender => self
                .delegated_amount
                .checked_add(amount)
                .ok_or_else(|| error!(VestingError::MathOverflow)),
            Some(delegate) if self.delegated_amount > 0 => {
                msg!(
                    "Distribution account still approves {} for {}",
                    delegate,
                    self.delegated_amount
                );
                err!(VestingError::DelegateInUse)
            }
            _ => Ok(amount),
        }
    }

    /// Fails unless `spender` may move at least `amount`.
    pub fn check_covers(&self, spender: &Pubkey, amount: u64) -> Result<()> {
        if self.delegate.as_ref() != Some(spender) {
            msg!("Distribution account has not approved {}", spender);
            return err!(VestingError::TransferFailed);
        }
        if self.delegated_amount < amount {
            msg!(
                "Allowance {} is below claim of {}",
                self.delegated_amount,
                amount
            );
            return err!(VestingError::TransferFailed);
        }
        Ok(())
    }
}
