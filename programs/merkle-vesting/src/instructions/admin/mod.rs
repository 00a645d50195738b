pub mod claim_contract_owner;
pub mod grant_contract_owner;
pub mod initialize;
pub mod register_new_vesting_round;
pub mod revoke_granted_contract_owner;
pub mod set_contract_status;

pub use claim_contract_owner::*;
pub use grant_contract_owner::*;
pub use initialize::*;
pub use register_new_vesting_round::*;
pub use revoke_granted_contract_owner::*;
pub use set_contract_status::*;
