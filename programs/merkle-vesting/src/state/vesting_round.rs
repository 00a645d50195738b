use anchor_lang::prelude::*;

use crate::errors::VestingError;
use crate::merkle::{self, Hash};
use crate::state::{ClaimRecord, ContractConfig};
use crate::vesting::WhitelistEntry;

/// One registered vesting round.
/// Seeds: [b"vesting_round", stage.to_le_bytes()]
#[account]
#[derive(Debug, InitSpace)]
pub struct VestingRound {
    pub stage: u64,
    pub owner: Pubkey,
    pub token_mint: Pubkey,
    /// Token program the mint lives under (SPL Token or Token-2022).
    pub token_program: Pubkey,
    /// Funding token account. Claims are paid from it through the approval
    /// its holder grants to the `config` PDA.
    pub distribution: Pubkey,
    pub merkle_root: [u8; 32],
    pub total_claimed: u64,
    /// Part of the distribution account's approval this round may still spend.
    pub allowance: u64,
    pub created_at: i64,
    pub bump: u8,
}

/// Caller-supplied part of a new round.
#[derive(Clone, Copy, Debug)]
pub struct RoundParams {
    pub owner: Pubkey,
    pub token_mint: Pubkey,
    pub token_program: Pubkey,
    pub distribution: Pubkey,
    pub merkle_root: [u8; 32],
}

impl VestingRound {
    /// Reads the round stored at its PDA. `None` when the stage was never
    /// registered and the account does not exist.
    pub fn try_load(info: &AccountInfo) -> Result<Option<Self>> {
        if info.data_is_empty() {
            return Ok(None);
        }
        require_keys_eq!(*info.owner, crate::ID, VestingError::ConfigNotFound);
        let data = info.try_borrow_data()?;
        Self::try_deserialize(&mut &data[..]).map(Some)
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    /// Validates the registration and takes the next stage from `config`.
    pub fn open(
        config: &mut ContractConfig,
        caller: &Pubkey,
        params: RoundParams,
        created_at: i64,
        bump: u8,
    ) -> Result<Self> {
        config.ensure_running()?;
        config.check_admin(caller)?;
        require!(
            params.merkle_root != [0u8; 32],
            VestingError::InvalidMerkleRoot
        );

        let stage = config.advance_stage()?;
        Ok(Self {
            stage,
            owner: params.owner,
            token_mint: params.token_mint,
            token_program: params.token_program,
            distribution: params.distribution,
            merkle_root: params.merkle_root,
            total_claimed: 0,
            allowance: 0,
            created_at,
            bump,
        })
    }

    /// Accounts a claim presents must be the ones the round was opened with.
    pub fn check_claim_accounts(
        &self,
        token_mint: &Pubkey,
        token_program: &Pubkey,
        distribution: &Pubkey,
    ) -> Result<()> {
        require_keys_eq!(*token_mint, self.token_mint, VestingError::InvalidTokenMint);
        require_keys_eq!(
            *token_program,
            self.token_program,
            VestingError::InvalidTokenProgram
        );
        require_keys_eq!(
            *distribution,
            self.distribution,
            VestingError::InvalidDistribution
        );
        Ok(())
    }

    /// Earmarks `amount` more of the shared approval for this round.
    pub fn fund(&mut self, amount: u64) -> Result<u64> {
        self.allowance = self
            .allowance
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(self.allowance)
    }

    pub fn draw_allowance(&mut self, amount: u64) -> Result<()> {
        if self.allowance < amount {
            msg!(
                "Round {} allowance {} is below claim of {}",
                self.stage,
                self.allowance,
                amount
            );
            return err!(VestingError::TransferFailed);
        }
        self.allowance -= amount;
        Ok(())
    }

    pub fn verify_entry(&self, entry: &WhitelistEntry, proof: &[Hash]) -> Result<()> {
        let leaf = merkle::leaf_hash(entry);
        if !merkle::verify(&leaf, proof, &self.merkle_root) {
            msg!("Proof verification failed for {}", entry.address);
            return err!(VestingError::ProofVerificationFailed);
        }
        Ok(())
    }

    /// Verifies `entry`, works out what is newly unlocked at `now` and books it
    /// against `record` and the round total. Returns the amount to pay out.
    pub fn settle_claim(
        &mut self,
        record: &mut ClaimRecord,
        entry: &WhitelistEntry,
        proof: &[Hash],
        now: i64,
    ) -> Result<u64> {
        self.verify_entry(entry, proof)?;

        let unlocked = entry.unlocked_amount(now)?;
        let claimable = record.claimable(unlocked)?;

        record.record(claimable, now)?;
        self.total_claimed = self
            .total_claimed
            .checked_add(claimable)
            .ok_or(VestingError::MathOverflow)?;

        Ok(claimable)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VestingRoundView {
    pub stage: u64,
    pub owner: Pubkey,
    pub token_address: Pubkey,
    pub token_program: Pubkey,
    pub distribution: Pubkey,
    pub merkle_root: [u8; 32],
    pub total_claimed: u64,
    pub allowance: u64,
    pub created_at: i64,
}

impl VestingRoundView {
    pub fn lookup(
        config: &ContractConfig,
        round: Option<&VestingRound>,
        stage: u64,
    ) -> Result<Self> {
        round
            .filter(|round| round.stage == stage && config.has_stage(stage))
            .map(Self::from)
            .ok_or_else(|| error!(VestingError::ConfigNotFound))
    }
}

impl From<&VestingRound> for VestingRoundView {
    fn from(round: &VestingRound) -> Self {
        Self {
            stage: round.stage,
            owner: round.owner,
            token_address: round.token_mint,
            token_program: round.token_program,
            distribution: round.distribution,
            merkle_root: round.merkle_root,
            total_claimed: round.total_claimed,
            allowance: round.allowance,
            created_at: round.created_at,
        }
    }
}
