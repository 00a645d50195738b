//! End-to-end flows over the program state, without a validator: rounds are
//! opened, proofs built with the off-chain tree and claims settled exactly as
//! the instruction handlers do it.

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::allowance::Approval;
use crate::errors::VestingError;
use crate::instructions::{ClaimKeys, ClaimRequest};
use crate::merkle::{leaf_hash, MerkleTree};
use crate::state::{
    ClaimRecord, ContractConfig, ContractStatus, RoundParams, VestingRound, VestingRoundView,
};
use crate::vesting::WhitelistEntry;

const T: i64 = 1_650_000_000;

fn fresh_config(owner: Pubkey) -> ContractConfig {
    ContractConfig {
        contract_owner: owner,
        granted_owner: None,
        current_stage: 0,
        status: ContractStatus::NormalRun,
        bump: 255,
    }
}

fn round_params(owner: Pubkey, merkle_root: [u8; 32]) -> RoundParams {
    RoundParams {
        owner,
        token_mint: Pubkey::new_unique(),
        token_program: anchor_spl::token::ID,
        distribution: Pubkey::new_unique(),
        merkle_root,
    }
}

fn whitelist(stage: u64, users: &[Pubkey]) -> Vec<WhitelistEntry> {
    users
        .iter()
        .enumerate()
        .map(|(i, user)| WhitelistEntry {
            address: *user,
            stage,
            amount: 100 * (i as u64 + 1),
            tge: 2_000,
            start_at: T,
            cliff: 5,
            duration: 30,
        })
        .collect()
}

struct Setup {
    owner: Pubkey,
    user_a: Pubkey,
    config: ContractConfig,
    round: VestingRound,
    tree: MerkleTree,
    entries: Vec<WhitelistEntry>,
}

fn setup() -> Setup {
    let owner = Pubkey::new_unique();
    let user_a = Pubkey::new_unique();
    let others: Vec<_> = (0..4).map(|_| Pubkey::new_unique()).collect();
    let users: Vec<_> = std::iter::once(user_a).chain(others).collect();

    let entries = whitelist(1, &users);
    let tree = MerkleTree::from_entries(&entries);

    let mut config = fresh_config(owner);
    let round = VestingRound::open(
        &mut config,
        &owner,
        round_params(owner, tree.root().unwrap()),
        T - 100,
        253,
    )
    .unwrap();

    Setup {
        owner,
        user_a,
        config,
        round,
        tree,
        entries,
    }
}

#[test]
fn scenario_valid_claim_at_tge_pays_tge_amount() {
    let Setup {
        config,
        mut round,
        tree,
        entries,
        user_a,
        ..
    } = setup();
    assert_eq!(config.current_stage, 1);

    let entry = entries[0];
    assert_eq!(entry.address, user_a);
    let proof = tree.proof(&leaf_hash(&entry)).unwrap();
    let mut record = ClaimRecord::default();

    let paid = round.settle_claim(&mut record, &entry, &proof, T).unwrap();
    assert_eq!(paid, 20);
    assert_eq!(record.claimed_amount, 20);
    assert_eq!(round.total_claimed, 20);
}

#[test]
fn scenario_tampered_amount_fails_verification() {
    let Setup {
        mut round,
        tree,
        entries,
        ..
    } = setup();

    let entry = entries[0];
    let proof = tree.proof(&leaf_hash(&entry)).unwrap();
    let forged = WhitelistEntry {
        amount: 3_000,
        ..entry
    };
    let mut record = ClaimRecord::default();

    assert_eq!(
        round
            .settle_claim(&mut record, &forged, &proof, T)
            .unwrap_err(),
        Error::from(VestingError::ProofVerificationFailed)
    );
    assert_eq!(record.claimed_amount, 0);
    assert_eq!(round.total_claimed, 0);
}

#[test]
fn scenario_claim_with_someone_elses_leaf_fails() {
    let Setup {
        mut round,
        tree,
        entries,
        ..
    } = setup();

    // the handler always puts the signer into the leaf
    let victim = entries[1];
    let proof = tree.proof(&leaf_hash(&victim)).unwrap();
    let attempt = WhitelistEntry {
        address: Pubkey::new_unique(),
        ..victim
    };
    let mut record = ClaimRecord::default();

    assert_eq!(
        round
            .settle_claim(&mut record, &attempt, &proof, T + 1_000)
            .unwrap_err(),
        Error::from(VestingError::ProofVerificationFailed)
    );
}

#[test]
fn scenario_non_owner_cannot_register_round() {
    let owner = Pubkey::new_unique();
    let intruder = Pubkey::new_unique();
    let mut config = fresh_config(owner);

    assert_eq!(
        VestingRound::open(&mut config, &intruder, round_params(intruder, [9u8; 32]), T, 255)
            .unwrap_err(),
        Error::from(VestingError::Unauthorized)
    );
    assert_eq!(config.current_stage, 0);
    assert_eq!(
        VestingRoundView::lookup(&config, None, 1).unwrap_err(),
        Error::from(VestingError::ConfigNotFound)
    );
}

#[test]
fn scenario_granted_owner_claims_and_third_party_is_rejected() {
    let Setup {
        mut config, owner, ..
    } = setup();
    let b = Pubkey::new_unique();
    let c = Pubkey::new_unique();

    config.grant_owner(&owner, b).unwrap();
    config.claim_owner(&b).unwrap();
    assert_eq!(config.contract_owner, b);
    assert_eq!(config.granted_owner, None);

    assert_eq!(
        config.claim_owner(&c).unwrap_err(),
        Error::from(VestingError::Unauthorized)
    );

    // the new owner can register, the old one no longer can
    assert!(VestingRound::open(&mut config, &owner, round_params(owner, [1u8; 32]), T, 255).is_err());
    let round = VestingRound::open(&mut config, &b, round_params(b, [1u8; 32]), T, 255).unwrap();
    assert_eq!(round.stage, 2);
}

#[test]
fn scenario_revoked_grant_cannot_be_claimed() {
    let Setup {
        mut config, owner, ..
    } = setup();
    let b = Pubkey::new_unique();

    config.grant_owner(&owner, b).unwrap();
    config.revoke_grant(&owner).unwrap();
    assert_eq!(
        config.claim_owner(&b).unwrap_err(),
        Error::from(VestingError::Unauthorized)
    );
    assert_eq!(config.contract_owner, owner);
}

#[test]
fn scenario_full_schedule_never_overpays() {
    let Setup {
        mut round,
        tree,
        entries,
        ..
    } = setup();

    let entry = entries[2];
    let proof = tree.proof(&leaf_hash(&entry)).unwrap();
    let mut record = ClaimRecord::default();
    let mut paid = 0;

    for now in (T - 10..T + 60).step_by(3) {
        if let Ok(amount) = round.settle_claim(&mut record, &entry, &proof, now) {
            paid += amount;
        }
        assert!(record.claimed_amount <= entry.unlocked_amount(now).unwrap());
    }

    assert_eq!(paid, entry.amount);
    assert_eq!(record.claimed_amount, entry.amount);
    assert_eq!(round.total_claimed, entry.amount);
}

#[test]
fn scenario_proof_from_another_stage_is_rejected() {
    let Setup {
        mut config,
        owner,
        tree,
        entries,
        ..
    } = setup();

    let second_entries = whitelist(2, &[entries[0].address]);
    let second_tree = MerkleTree::from_entries(&second_entries);
    let mut second = VestingRound::open(
        &mut config,
        &owner,
        round_params(owner, second_tree.root().unwrap()),
        T,
        252,
    )
    .unwrap();
    assert_eq!(second.stage, 2);

    // stage 1 proof replayed against stage 2
    let stale = entries[0];
    let stale_proof = tree.proof(&leaf_hash(&stale)).unwrap();
    let replay = WhitelistEntry { stage: 2, ..stale };
    let mut record = ClaimRecord::default();
    assert!(second
        .settle_claim(&mut record, &replay, &stale_proof, T)
        .is_err());

    let fresh = second_entries[0];
    let fresh_proof = second_tree.proof(&leaf_hash(&fresh)).unwrap();
    assert_eq!(
        second
            .settle_claim(&mut record, &fresh, &fresh_proof, T)
            .unwrap(),
        20
    );
}

/// Approval left after the delegate moved `amount`, as the token program books it.
fn spend(approval: Approval, amount: u64) -> Approval {
    let delegated_amount = approval.delegated_amount - amount;
    Approval {
        delegate: approval.delegate.filter(|_| delegated_amount > 0),
        delegated_amount,
    }
}

fn request_for(entry: &WhitelistEntry, tree: &MerkleTree) -> ClaimRequest {
    ClaimRequest {
        stage: entry.stage,
        amount: entry.amount,
        tge: entry.tge,
        start_at: entry.start_at,
        cliff: entry.cliff,
        duration: entry.duration,
        proof: tree.proof(&leaf_hash(entry)).unwrap(),
    }
}

#[test]
fn scenario_rounds_sharing_a_distribution_account_pay_independently() {
    let owner = Pubkey::new_unique();
    let config_pda = Pubkey::new_unique();
    let user_a = Pubkey::new_unique();
    let user_b = Pubkey::new_unique();
    let mut config = fresh_config(owner);

    let first_entries = whitelist(1, &[user_a, Pubkey::new_unique()]);
    let first_tree = MerkleTree::from_entries(&first_entries);
    let shared = round_params(owner, first_tree.root().unwrap());
    let mut first = VestingRound::open(&mut config, &owner, shared, T, 254).unwrap();

    let second_entries = whitelist(2, &[user_b, Pubkey::new_unique()]);
    let second_tree = MerkleTree::from_entries(&second_entries);
    let mut second = VestingRound::open(
        &mut config,
        &owner,
        RoundParams {
            merkle_root: second_tree.root().unwrap(),
            ..shared
        },
        T,
        253,
    )
    .unwrap();

    // the funder approves the config PDA once per round on the same account
    let mut approval = Approval::default();
    for (round, amount) in [(&mut first, 300), (&mut second, 300)] {
        let approved = approval.increased(&config_pda, amount).unwrap();
        round.fund(amount).unwrap();
        approval = Approval {
            delegate: Some(config_pda),
            delegated_amount: approved,
        };
    }
    assert_eq!(approval.delegated_amount, 600);

    let keys = |claimant| ClaimKeys {
        claimant,
        token_mint: shared.token_mint,
        token_program: shared.token_program,
        distribution: shared.distribution,
    };

    let mut record_a = ClaimRecord::default();
    let paid_a = request_for(&first_entries[0], &first_tree)
        .settle(&mut first, &mut record_a, &keys(user_a), &approval, &config_pda, T)
        .unwrap();
    assert_eq!(paid_a, 20);
    approval = spend(approval, paid_a);

    let mut record_b = ClaimRecord::default();
    let paid_b = request_for(&second_entries[0], &second_tree)
        .settle(&mut second, &mut record_b, &keys(user_b), &approval, &config_pda, T + 100)
        .unwrap();
    assert_eq!(paid_b, 100);
    approval = spend(approval, paid_b);

    // round 1 keeps its own share after round 2 was funded and paid
    let paid_a = request_for(&first_entries[0], &first_tree)
        .settle(&mut first, &mut record_a, &keys(user_a), &approval, &config_pda, T + 100)
        .unwrap();
    assert_eq!(paid_a, 80);

    assert_eq!(first.allowance, 200);
    assert_eq!(second.allowance, 200);
    assert_eq!(spend(approval, paid_a).delegated_amount, 400);
}

#[test]
fn scenario_live_foreign_delegate_blocks_funding() {
    let config_pda = Pubkey::new_unique();
    let foreign = Approval {
        delegate: Some(Pubkey::new_unique()),
        delegated_amount: 10,
    };

    assert_eq!(
        foreign.increased(&config_pda, 100).unwrap_err(),
        Error::from(VestingError::DelegateInUse)
    );
}
