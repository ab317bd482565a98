use anchor_lang::prelude::*;

use crate::constants::MAX_GRANTS_PER_BENEFICIARY;
use crate::error::TimelockError;
use crate::state::{BeneficiaryGrants, DistributionGrant, PoolState};

pub fn add_beneficiary(
    ctx: Context<AddBeneficiary>,
    beneficiary: Pubkey,
    amount: u64,
) -> Result<()> {
    let pool_key = ctx.accounts.pool_state.key();
    let grant_key = ctx.accounts.grant.key();

    let pool = &mut ctx.accounts.pool_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        pool.owner,
        TimelockError::Unauthorized
    );
    pool.check_beneficiary(&beneficiary)?;

    let registry = &mut ctx.accounts.beneficiary_grants;
    if registry.beneficiary == Pubkey::default() {
        registry.beneficiary = beneficiary;
    }
    require!(
        registry.grants.len() < MAX_GRANTS_PER_BENEFICIARY,
        TimelockError::GrantListFull
    );

    // Single indivisible check-and-increment against the ceiling; no token
    // moves here, the amount is only reserved.
    pool.reserve(amount)?;

    let grant = &mut ctx.accounts.grant;
    grant.pool = pool_key;
    grant.beneficiary = beneficiary;
    grant.amount = amount;
    grant.release_date = pool.release_date;
    grant.released = false;

    registry.grants.push(grant_key);

    emit!(BeneficiaryAdded {
        beneficiary,
        grant: grant_key,
        amount,
        allocated: pool.allocated,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct AddBeneficiary<'info> {
    #[account(mut, seeds = [b"pool_state"], bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        init,
        payer = owner,
        space = 8 + DistributionGrant::SIZE,
        seeds = [b"grant", pool_state.key().as_ref(), &pool_state.grant_count.to_le_bytes()],
        bump
    )]
    pub grant: Account<'info, DistributionGrant>,

    #[account(
        init_if_needed,
        payer = owner,
        space = BeneficiaryGrants::space(),
        seeds = [b"grants", pool_state.key().as_ref(), beneficiary.as_ref()],
        bump
    )]
    pub beneficiary_grants: Account<'info, BeneficiaryGrants>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BeneficiaryAdded {
    pub beneficiary: Pubkey,
    pub grant: Pubkey,
    pub amount: u64,
    pub allocated: u64,
}
