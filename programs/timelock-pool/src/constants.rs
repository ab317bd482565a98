//! Program-wide constants.

/// Max grants recorded in one beneficiary's reverse-index PDA.
pub const MAX_GRANTS_PER_BENEFICIARY: usize = 16;
