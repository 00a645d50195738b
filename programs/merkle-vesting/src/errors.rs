use anchor_lang::prelude::*;

#[error_code]
pub enum VestingError {
    #[msg("Caller is not allowed to run this command")]
    Unauthorized,
    #[msg("No configuration for this stage")]
    ConfigNotFound,
    #[msg("Proof verification failed")]
    ProofVerificationFailed,
    #[msg("Nothing available to claim")]
    NothingToClaim,
    #[msg("Token transfer from the distribution account failed")]
    TransferFailed,
    #[msg("This contract is stopped and this action is not allowed")]
    ContractStopped,
    #[msg("TGE unlock must not exceed 10000 basis points")]
    InvalidTge,
    #[msg("Merkle root must not be empty")]
    InvalidMerkleRoot,
    #[msg("Token mint does not match the vesting round")]
    InvalidTokenMint,
    #[msg("Token program does not match the vesting round")]
    InvalidTokenProgram,
    #[msg("Distribution account does not match the vesting round")]
    InvalidDistribution,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Distribution account is already delegated to another spender")]
    DelegateInUse,
}
