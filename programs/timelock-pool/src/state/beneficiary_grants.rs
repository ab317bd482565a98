use anchor_lang::prelude::*;

use crate::constants::MAX_GRANTS_PER_BENEFICIARY;

/// Reverse-index PDA: the grants issued to one beneficiary, in allocation
/// order. Append-only; entries are never removed, released or not.
#[account]
pub struct BeneficiaryGrants {
    pub beneficiary: Pubkey,
    pub grants: Vec<Pubkey>,
}

impl BeneficiaryGrants {
    /// Space for discriminator + beneficiary + full grants vec.
    pub const fn space() -> usize {
        8 + 32 + 4 + 32 * MAX_GRANTS_PER_BENEFICIARY
    }
}
