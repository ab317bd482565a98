use anchor_lang::prelude::*;

use crate::error::TimelockError;

/// Singleton pool state PDA.
#[account]
pub struct PoolState {
    /// Identity with exclusive allocation rights; set at construction.
    pub owner: Pubkey,
    /// Mint of the token this pool distributes.
    pub mint: Pubkey,
    /// Ceiling on cumulative allocation; immutable after construction.
    pub total_funds: u64,
    /// Timestamp shared by every grant issued from this pool (Unix seconds, UTC).
    pub release_date: i64,
    /// Running sum of all amounts granted so far; never exceeds total_funds.
    pub allocated: u64,
    /// Running sum of all amounts released so far; never exceeds allocated.
    pub released: u64,
    /// Number of grants issued; also the next grant PDA index.
    pub grant_count: u64,
}

impl PoolState {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        8 +  // total_funds
        8 +  // release_date
        8 +  // allocated
        8 +  // released
        8;   // grant_count

    /// Construction-time parameter validation.
    pub fn validate_config(
        total_funds: u64,
        release_date: i64,
        now: i64,
    ) -> core::result::Result<(), TimelockError> {
        if total_funds == 0 {
            return Err(TimelockError::InvalidAmount);
        }
        if release_date <= now {
            return Err(TimelockError::InvalidReleaseDate);
        }
        Ok(())
    }

    /// A beneficiary must be a real identity and never the pool owner.
    pub fn check_beneficiary(&self, beneficiary: &Pubkey) -> core::result::Result<(), TimelockError> {
        if *beneficiary == Pubkey::default() || *beneficiary == self.owner {
            return Err(TimelockError::InvalidBeneficiary);
        }
        Ok(())
    }

    /// Reserve `amount` against the pool ceiling and take the next grant index.
    /// Check-and-increment is one step: on any error the counters are untouched.
    pub fn reserve(&mut self, amount: u64) -> core::result::Result<(), TimelockError> {
        if amount == 0 {
            return Err(TimelockError::InvalidAmount);
        }
        let allocated = self
            .allocated
            .checked_add(amount)
            .ok_or(TimelockError::MathOverflow)?;
        if allocated > self.total_funds {
            return Err(TimelockError::PoolExhausted);
        }
        let grant_count = self
            .grant_count
            .checked_add(1)
            .ok_or(TimelockError::MathOverflow)?;
        self.allocated = allocated;
        self.grant_count = grant_count;
        Ok(())
    }

    /// Account for a successful grant payout.
    pub fn record_release(&mut self, amount: u64) -> core::result::Result<(), TimelockError> {
        let released = self
            .released
            .checked_add(amount)
            .ok_or(TimelockError::MathOverflow)?;
        if released > self.allocated {
            return Err(TimelockError::MathOverflow);
        }
        self.released = released;
        Ok(())
    }

    /// Locked obligations still owed to beneficiaries.
    pub fn outstanding(&self) -> u64 {
        self.allocated.saturating_sub(self.released)
    }

    /// Vault surplus the owner may take back: anything above outstanding obligations.
    pub fn reclaimable(&self, vault_balance: u64) -> u64 {
        vault_balance.saturating_sub(self.outstanding())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELEASE_DATE: i64 = 1_767_225_600;

    fn pool(total_funds: u64) -> PoolState {
        PoolState {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            total_funds,
            release_date: RELEASE_DATE,
            allocated: 0,
            released: 0,
            grant_count: 0,
        }
    }

    #[test]
    fn config_rejects_zero_total_funds() {
        let res = PoolState::validate_config(0, RELEASE_DATE, RELEASE_DATE - 86_400);
        assert!(matches!(res, Err(TimelockError::InvalidAmount)));
    }

    #[test]
    fn config_rejects_release_date_not_strictly_future() {
        let now = RELEASE_DATE;
        // now itself is not acceptable
        assert!(matches!(
            PoolState::validate_config(1_000, now, now),
            Err(TimelockError::InvalidReleaseDate)
        ));
        // nor is the past
        assert!(matches!(
            PoolState::validate_config(1_000, now - 100_000, now),
            Err(TimelockError::InvalidReleaseDate)
        ));
        // one second ahead is
        assert!(PoolState::validate_config(1_000, now + 1, now).is_ok());
    }

    #[test]
    fn allocation_sums_exactly() {
        let mut p = pool(10_000);
        for amount in [1, 2_000, 499, 7_500] {
            p.reserve(amount).unwrap();
        }
        assert_eq!(p.allocated, 10_000);
        assert_eq!(p.grant_count, 4);
        assert!(p.allocated <= p.total_funds);
    }

    #[test]
    fn zero_amount_is_rejected() {
        let mut p = pool(1_000);
        assert!(matches!(p.reserve(0), Err(TimelockError::InvalidAmount)));
        assert_eq!(p.allocated, 0);
        assert_eq!(p.grant_count, 0);
    }

    #[test]
    fn over_allocation_rejected_without_partial_state() {
        let mut p = pool(4_500);
        p.reserve(4_000).unwrap();

        let before = (p.allocated, p.grant_count);
        assert!(matches!(p.reserve(501), Err(TimelockError::PoolExhausted)));
        assert_eq!((p.allocated, p.grant_count), before);

        // filling the pool exactly is allowed
        p.reserve(500).unwrap();
        assert_eq!(p.allocated, p.total_funds);
        assert!(matches!(p.reserve(1), Err(TimelockError::PoolExhausted)));
    }

    #[test]
    fn owner_and_default_beneficiary_are_rejected() {
        let p = pool(1_000);
        let owner = p.owner;
        assert!(matches!(
            p.check_beneficiary(&owner),
            Err(TimelockError::InvalidBeneficiary)
        ));
        assert!(matches!(
            p.check_beneficiary(&Pubkey::default()),
            Err(TimelockError::InvalidBeneficiary)
        ));
        assert!(p.check_beneficiary(&Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn release_accounting_never_exceeds_allocated() {
        let mut p = pool(4_500);
        p.reserve(1_000).unwrap();
        p.record_release(1_000).unwrap();
        assert_eq!(p.released, 1_000);
        assert!(matches!(
            p.record_release(1),
            Err(TimelockError::MathOverflow)
        ));
        assert_eq!(p.released, 1_000);
    }

    #[test]
    fn reclaimable_is_vault_surplus_over_outstanding() {
        let mut p = pool(10_000);
        p.reserve(6_000).unwrap();
        // fully funded vault, nothing released: only the unallocated part is free
        assert_eq!(p.reclaimable(10_000), 4_000);
        p.record_release(2_500).unwrap();
        assert_eq!(p.outstanding(), 3_500);
        assert_eq!(p.reclaimable(7_500), 4_000);
        // after a reclaim the vault equals outstanding and nothing is left
        assert_eq!(p.reclaimable(3_500), 0);
    }

    #[test]
    fn three_beneficiaries_drain_the_pool() {
        // 1000 + 1500 + 2000 fills a 4500 pool; any further allocation fails.
        let mut p = pool(4_500);
        p.reserve(1_000).unwrap();
        p.reserve(1_500).unwrap();
        p.reserve(2_000).unwrap();
        assert_eq!(p.allocated, 4_500);
        assert_eq!(p.grant_count, 3);
        assert!(matches!(p.reserve(1), Err(TimelockError::PoolExhausted)));

        // releasing every grant pays out exactly the allocated total
        p.record_release(1_000).unwrap();
        p.record_release(1_500).unwrap();
        p.record_release(2_000).unwrap();
        assert_eq!(p.released, 4_500);
        assert_eq!(p.outstanding(), 0);
    }
}
