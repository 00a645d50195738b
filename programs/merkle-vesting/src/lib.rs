#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod allowance;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod state;
pub mod vesting;

#[cfg(test)]
mod scenarios;

pub use instructions::*;
pub use state::*;

declare_id!("4zYUwyA5QuP7gmHVXdBmR9wsqiDPXT7SCPYT67E52fwt");

#[program]
pub mod merkle_vesting {

    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        owner: Option<Pubkey>,
        contract_status: Option<ContractStatus>,
    ) -> Result<()> {
        ctx.accounts.initialize(owner, contract_status, &ctx.bumps)
    }

    pub fn register_new_vesting_round(
        ctx: Context<RegisterNewVestingRound>,
        owner: Pubkey,
        merkle_root: [u8; 32],
        distribution: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts
            .register(owner, merkle_root, distribution, &ctx.bumps)
    }

    pub fn set_contract_status(
        ctx: Context<SetContractStatus>,
        level: ContractStatus,
    ) -> Result<()> {
        ctx.accounts.set_status(level)
    }

    pub fn grant_contract_owner(ctx: Context<GrantContractOwner>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.grant(new_admin)
    }

    pub fn claim_contract_owner(ctx: Context<ClaimContractOwner>) -> Result<()> {
        ctx.accounts.claim_ownership()
    }

    pub fn revoke_granted_contract_owner(ctx: Context<RevokeGrantedContractOwner>) -> Result<()> {
        ctx.accounts.revoke()
    }

    pub fn increase_allowance(
        ctx: Context<IncreaseAllowance>,
        stage: u64,
        amount: u64,
    ) -> Result<()> {
        ctx.accounts.increase(stage, amount)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn claim(
        ctx: Context<Claim>,
        stage: u64,
        amount: u64,
        tge: u16,
        start_at: i64,
        cliff: u64,
        duration: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        let request = ClaimRequest {
            stage,
            amount,
            tge,
            start_at,
            cliff,
            duration,
            proof,
        };
        ctx.accounts.claim(request, ctx.bumps.claim_record)
    }

    pub fn get_config(ctx: Context<GetConfig>, stage: u64) -> Result<VestingRoundView> {
        ctx.accounts.round_view(stage)
    }

    pub fn get_current_stage(ctx: Context<ReadConfig>) -> Result<u64> {
        Ok(ctx.accounts.config.current_stage)
    }

    pub fn contract_owner(ctx: Context<ReadConfig>) -> Result<Pubkey> {
        Ok(ctx.accounts.config.contract_owner)
    }

    pub fn granted_contract_owner(ctx: Context<ReadConfig>) -> Result<Option<Pubkey>> {
        Ok(ctx.accounts.config.granted_owner)
    }

    pub fn get_claim_status(
        ctx: Context<GetClaimStatus>,
        stage: u64,
        claimant: Pubkey,
    ) -> Result<ClaimStatusView> {
        Ok(ctx.accounts.status(stage, claimant))
    }
}
