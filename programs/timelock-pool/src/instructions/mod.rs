pub mod initialize_pool;
pub mod add_beneficiary;
pub mod get_distribution_contracts;
pub mod release;
pub mod reclaim_unallocated;

pub use initialize_pool::*;
pub use add_beneficiary::*;
pub use get_distribution_contracts::*;
pub use release::*;
pub use reclaim_unallocated::*;
