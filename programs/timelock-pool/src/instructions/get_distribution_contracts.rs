use anchor_lang::prelude::*;

use crate::state::{BeneficiaryGrants, PoolState};

/// Permissionless query: the grants ever issued to `beneficiary`, in
/// allocation order. A beneficiary that was never allocated to has no
/// registry account and yields an empty list, not an error.
pub fn get_distribution_contracts(
    ctx: Context<GetDistributionContracts>,
    beneficiary: Pubkey,
) -> Result<Vec<Pubkey>> {
    let grants = match ctx.accounts.beneficiary_grants.as_ref() {
        Some(registry) => registry.grants.clone(),
        None => Vec::new(),
    };

    emit!(DistributionContracts {
        beneficiary,
        grants: grants.clone(),
    });

    Ok(grants)
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct GetDistributionContracts<'info> {
    #[account(seeds = [b"pool_state"], bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        seeds = [b"grants", pool_state.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub beneficiary_grants: Option<Account<'info, BeneficiaryGrants>>,
}

#[event]
pub struct DistributionContracts {
    pub beneficiary: Pubkey,
    pub grants: Vec<Pubkey>,
}
