pub mod claim_record;
pub mod config;
pub mod vesting_round;

pub use claim_record::*;
pub use config::*;
pub use vesting_round::*;
