use anchor_lang::prelude::*;

use crate::error::TimelockError;

/// One locked grant, created per allocation. Immutable except `released`,
/// which flips to true exactly once on a successful payout.
#[account]
pub struct DistributionGrant {
    /// Pool this grant was issued from.
    pub pool: Pubkey,
    /// Fixed beneficiary; never the pool owner.
    pub beneficiary: Pubkey,
    /// Locked quantity, set at creation.
    pub amount: u64,
    /// Copied from the pool at creation time.
    pub release_date: i64,
    /// False at creation, true after the one successful release.
    pub released: bool,
}

impl DistributionGrant {
    pub const SIZE: usize =
        32 + // pool
        32 + // beneficiary
        8 +  // amount
        8 +  // release_date
        1;   // released

    /// Locked -> Released guard: the grant must be past its release date
    /// and not yet consumed.
    pub fn assert_releasable(&self, now: i64) -> core::result::Result<(), TimelockError> {
        if now < self.release_date {
            return Err(TimelockError::TooEarly);
        }
        if self.released {
            return Err(TimelockError::AlreadyReleased);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(release_date: i64) -> DistributionGrant {
        DistributionGrant {
            pool: Pubkey::new_unique(),
            beneficiary: Pubkey::new_unique(),
            amount: 1_000,
            release_date,
            released: false,
        }
    }

    #[test]
    fn locked_strictly_before_release_date() {
        let g = grant(1_000);
        assert!(matches!(g.assert_releasable(0), Err(TimelockError::TooEarly)));
        assert!(matches!(g.assert_releasable(999), Err(TimelockError::TooEarly)));
        // the date itself is inclusive
        assert!(g.assert_releasable(1_000).is_ok());
        assert!(g.assert_releasable(2_000).is_ok());
    }

    #[test]
    fn released_is_terminal() {
        let mut g = grant(1_000);
        g.assert_releasable(1_000).unwrap();
        g.released = true;
        assert!(matches!(
            g.assert_releasable(1_000),
            Err(TimelockError::AlreadyReleased)
        ));
        assert!(matches!(
            g.assert_releasable(i64::MAX),
            Err(TimelockError::AlreadyReleased)
        ));
    }

    #[test]
    fn grants_for_one_beneficiary_stay_independent() {
        let beneficiary = Pubkey::new_unique();
        let mut first = grant(1_000);
        let mut second = grant(1_000);
        first.beneficiary = beneficiary;
        second.beneficiary = beneficiary;

        first.released = true;
        assert!(matches!(
            first.assert_releasable(1_000),
            Err(TimelockError::AlreadyReleased)
        ));
        assert!(second.assert_releasable(1_000).is_ok());
    }
}
