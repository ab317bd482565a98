use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::TimelockError;
use crate::state::{DistributionGrant, PoolState};

pub fn release(ctx: Context<Release>) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let pool_state_ai = ctx.accounts.pool_state.to_account_info();
    let pool_state_bump = ctx.bumps.pool_state;
    let grant_key = ctx.accounts.grant.key();

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.grant.assert_releasable(now)?;

    let amount = ctx.accounts.grant.amount;
    require!(
        ctx.accounts.vault.amount >= amount,
        TimelockError::TransferFailed
    );

    // CPI transfer from vault to the beneficiary, signed by the pool PDA.
    // A failed transfer aborts the transaction, so `released` stays false
    // and the grant remains retryable.
    let signer_seeds: &[&[&[u8]]] = &[&[b"pool_state", &[pool_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token_account.to_account_info(),
                authority: pool_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    let grant = &mut ctx.accounts.grant;
    grant.released = true;
    let beneficiary = grant.beneficiary;

    let pool = &mut ctx.accounts.pool_state;
    pool.record_release(amount)?;

    emit!(GrantReleased {
        grant: grant_key,
        beneficiary,
        amount,
        released_total: pool.released,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [b"pool_state"], bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        constraint = grant.pool == pool_state.key() @ TimelockError::InvalidGrant,
    )]
    pub grant: Account<'info, DistributionGrant>,

    #[account(
        mut,
        seeds = [b"vault", pool_state.key().as_ref()],
        bump,
        constraint = vault.mint == pool_state.mint @ TimelockError::InvalidToken,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = beneficiary_token_account.mint == pool_state.mint @ TimelockError::InvalidToken,
        constraint = beneficiary_token_account.owner == grant.beneficiary @ TimelockError::InvalidBeneficiary,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct GrantReleased {
    pub grant: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub released_total: u64,
}
