use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::allowance::Approval;
use crate::constants::{CLAIM_RECORD_SEED, CONFIG_SEED, VESTING_ROUND_SEED};
use crate::errors::VestingError;
use crate::events::TokensClaimed;
use crate::merkle::Hash;
use crate::state::{ClaimRecord, ContractConfig, VestingRound};
use crate::vesting::WhitelistEntry;

#[derive(Accounts)]
#[instruction(stage: u64)]
pub struct Claim<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, ContractConfig>,

    /// CHECK: PDA of the requested stage. It is empty when the stage was
    /// never registered; otherwise it is read and written as a `VestingRound`.
    #[account(mut, seeds = [VESTING_ROUND_SEED, &stage.to_le_bytes()], bump)]
    pub vesting_round: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = claimant,
        space = 8 + ClaimRecord::INIT_SPACE,
        seeds = [CLAIM_RECORD_SEED, &stage.to_le_bytes(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    #[account(mut)]
    pub distribution: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = token_mint,
        associated_token::authority = claimant,
        associated_token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Schedule terms a claimant submits together with the proof of their leaf.
#[derive(Clone, Debug)]
pub struct ClaimRequest {
    pub stage: u64,
    pub amount: u64,
    pub tge: u16,
    pub start_at: i64,
    pub cliff: u64,
    pub duration: u64,
    pub proof: Vec<Hash>,
}

/// Keys of the accounts presented with a claim.
#[derive(Clone, Copy, Debug)]
pub struct ClaimKeys {
    pub claimant: Pubkey,
    pub token_mint: Pubkey,
    pub token_program: Pubkey,
    pub distribution: Pubkey,
}

impl ClaimRequest {
    /// The leaf address is always the signer, so nobody can claim for someone else.
    pub fn entry_for(&self, claimant: Pubkey) -> WhitelistEntry {
        WhitelistEntry {
            address: claimant,
            stage: self.stage,
            amount: self.amount,
            tge: self.tge,
            start_at: self.start_at,
            cliff: self.cliff,
            duration: self.duration,
        }
    }

    /// Runs every check of a claim and books it against the round and the
    /// claimant's record. Returns the amount `delegate` has to transfer.
    pub fn settle(
        &self,
        round: &mut VestingRound,
        record: &mut ClaimRecord,
        keys: &ClaimKeys,
        approval: &Approval,
        delegate: &Pubkey,
        now: i64,
    ) -> Result<u64> {
        round.check_claim_accounts(&keys.token_mint, &keys.token_program, &keys.distribution)?;

        if record.claimant == Pubkey::default() {
            record.stage = self.stage;
            record.claimant = keys.claimant;
        }

        let entry = self.entry_for(keys.claimant);
        let claimable = round.settle_claim(record, &entry, &self.proof, now)?;
        round.draw_allowance(claimable)?;
        approval.check_covers(delegate, claimable)?;
        Ok(claimable)
    }
}

impl<'info> Claim<'info> {
    pub fn claim(&mut self, request: ClaimRequest, record_bump: u8) -> Result<()> {
        self.config.ensure_running()?;

        let round_info = self.vesting_round.to_account_info();
        let mut round =
            VestingRound::try_load(&round_info)?.ok_or(VestingError::ConfigNotFound)?;

        let keys = ClaimKeys {
            claimant: self.claimant.key(),
            token_mint: self.token_mint.key(),
            token_program: self.token_program.key(),
            distribution: self.distribution.key(),
        };
        let now = Clock::get()?.unix_timestamp;
        let claimable = request.settle(
            &mut round,
            &mut self.claim_record,
            &keys,
            &Approval::of(&self.distribution),
            &self.config.key(),
            now,
        )?;
        self.claim_record.bump = record_bump;
        round.store(&round_info)?;

        let bump = [self.config.bump];
        let seeds = ContractConfig::signer_seeds(&bump);
        let signer_seeds = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            TransferChecked {
                from: self.distribution.to_account_info(),
                mint: self.token_mint.to_account_info(),
                to: self.claimant_token_account.to_account_info(),
                authority: self.config.to_account_info(),
            },
            signer_seeds,
        );
        token_interface::transfer_checked(cpi_ctx, claimable, self.token_mint.decimals).map_err(
            |e| {
                msg!("Token transfer failed: {}", e);
                error!(VestingError::TransferFailed)
            },
        )?;

        emit!(TokensClaimed {
            stage: request.stage,
            claimant: keys.claimant,
            amount: claimable,
            total_claimed: self.claim_record.claimed_amount,
            claimed_at: now,
        });
        Ok(())
    }
}
