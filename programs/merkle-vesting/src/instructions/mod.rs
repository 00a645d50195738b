pub mod admin;
pub mod claim;
pub mod increase_allowance;
pub mod queries;

pub use admin::*;
pub use claim::*;
pub use increase_allowance::*;
pub use queries::*;
