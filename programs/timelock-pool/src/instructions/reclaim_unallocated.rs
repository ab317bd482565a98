use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::TimelockError;
use crate::state::PoolState;

/// Owner recovers the vault surplus over outstanding grant obligations,
/// once the release date has passed. Grant funds are never touched: the
/// reclaimable amount is whatever the vault holds beyond allocated minus
/// released.
pub fn reclaim_unallocated(ctx: Context<ReclaimUnallocated>) -> Result<()> {
    let st = &ctx.accounts.pool_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        TimelockError::Unauthorized
    );

    let now = Clock::get()?.unix_timestamp;
    require!(now >= st.release_date, TimelockError::TooEarly);

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        st.mint,
        TimelockError::InvalidToken
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        st.owner,
        TimelockError::InvalidToken
    );

    let amount = st.reclaimable(ctx.accounts.vault.amount);
    require!(amount > 0, TimelockError::NothingToReclaim);

    let signer_seeds: &[&[&[u8]]] = &[&[b"pool_state", &[ctx.bumps.pool_state]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_token_account.to_account_info(),
                authority: ctx.accounts.pool_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(UnallocatedReclaimed {
        owner: ctx.accounts.pool_state.owner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReclaimUnallocated<'info> {
    #[account(seeds = [b"pool_state"], bump)]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        mut,
        seeds = [b"vault", pool_state.key().as_ref()],
        bump,
        constraint = vault.mint == pool_state.mint @ TimelockError::InvalidToken,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct UnallocatedReclaimed {
    pub owner: Pubkey,
    pub amount: u64,
}
