//! Bounded token-allocation pool: an owner funds a vault once, assigns
//! fractions of it to beneficiaries as individually claimable grants, and
//! every grant unlocks at one shared release date.

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod timelock_pool {
    use super::*;

    /// Create the pool: validate the configuration and deposit
    /// `total_funds` of the mint into the program vault.
    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        total_funds: u64,
        release_date: i64,
    ) -> Result<()> {
        instructions::initialize_pool(ctx, total_funds, release_date)
    }

    /// Owner-only: reserve `amount` for `beneficiary` as a new locked
    /// grant. May be called repeatedly for the same beneficiary.
    pub fn add_beneficiary(
        ctx: Context<AddBeneficiary>,
        beneficiary: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::add_beneficiary(ctx, beneficiary, amount)
    }

    /// The grant addresses issued to `beneficiary`, in allocation order.
    pub fn get_distribution_contracts(
        ctx: Context<GetDistributionContracts>,
        beneficiary: Pubkey,
    ) -> Result<Vec<Pubkey>> {
        instructions::get_distribution_contracts(ctx, beneficiary)
    }

    /// Pay out one grant to its beneficiary. Anyone may trigger this once
    /// the release date has passed.
    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release(ctx)
    }

    /// Owner-only: take back the vault surplus over outstanding grants,
    /// after the release date.
    pub fn reclaim_unallocated(ctx: Context<ReclaimUnallocated>) -> Result<()> {
        instructions::reclaim_unallocated(ctx)
    }
}
