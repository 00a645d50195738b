pub const CONFIG_SEED: &[u8] = b"config";
pub const VESTING_ROUND_SEED: &[u8] = b"vesting_round";
pub const CLAIM_RECORD_SEED: &[u8] = b"claim_record";

/// TGE unlock fractions are expressed in parts per 10 000 of the entitlement.
pub const BPS_DENOMINATOR: u64 = 10_000;
