use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::TimelockError;
use crate::state::PoolState;

pub fn initialize_pool(
    ctx: Context<InitializePool>,
    total_funds: u64,
    release_date: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    PoolState::validate_config(total_funds, release_date, now)?;

    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        ctx.accounts.mint.key(),
        TimelockError::InvalidToken
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        TimelockError::InvalidToken
    );

    let st = &mut ctx.accounts.pool_state;
    st.owner = ctx.accounts.owner.key();
    st.mint = ctx.accounts.mint.key();
    st.total_funds = total_funds;
    st.release_date = release_date;
    st.allocated = 0;
    st.released = 0;
    st.grant_count = 0;

    // Fund the vault with the full pool up front. If this transfer fails the
    // whole transaction aborts and the pool does not exist.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        total_funds,
    )?;

    emit!(PoolInitialized {
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.mint.key(),
        total_funds,
        release_date,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + PoolState::SIZE,
        seeds = [b"pool_state"],
        bump
    )]
    pub pool_state: Account<'info, PoolState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = pool_state,
        seeds = [b"vault", pool_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct PoolInitialized {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub total_funds: u64,
    pub release_date: i64,
}
