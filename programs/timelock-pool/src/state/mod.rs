pub mod beneficiary_grants;
pub mod distribution_grant;
pub mod pool_state;

pub use beneficiary_grants::*;
pub use distribution_grant::*;
pub use pool_state::*;
