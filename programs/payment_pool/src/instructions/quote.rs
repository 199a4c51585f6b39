use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for the balance views
 *
 * Read-only: nothing is written and the payee does not sign. Values are
 * returned through return data and mirrored in a BalanceQuoted event.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct QuoteBalance<'info> {
    #[account(
        seeds = [POOL_SEED.as_bytes(), pool.payment_token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, PaymentPool>,

    #[account(
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Only its key is used, as the wallet the quote is computed for
    pub payee: UncheckedAccount<'info>,
}

/// Vesting-gated amount the payee can claim now. Fails with LockupActive
/// before the release time.
pub fn handle_claimable_amount(ctx: Context<QuoteBalance>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &ctx.accounts.pool;
    let payee = ctx.accounts.payee.key();
    let vault_balance = ctx.accounts.token_vault.amount;

    let claimable = pool.claimable(&payee, vault_balance, now)?;
    let total_balance = pool.remaining_entitlement(&payee, vault_balance)?;

    emit_cpi!(BalanceQuoted {
        pool: pool.key(),
        payee,
        claimable: Some(claimable),
        total_balance,
    });

    Ok(claimable)
}

/// Unclaimed part of the payee's proportional share, regardless of vesting.
pub fn handle_total_balance(ctx: Context<QuoteBalance>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let pool = &ctx.accounts.pool;
    let payee = ctx.accounts.payee.key();
    let vault_balance = ctx.accounts.token_vault.amount;

    let total_balance = pool.remaining_entitlement(&payee, vault_balance)?;
    let claimable = if now >= pool.release_time {
        Some(pool.claimable(&payee, vault_balance, now)?)
    } else {
        None
    };

    emit_cpi!(BalanceQuoted {
        pool: pool.key(),
        payee,
        claimable,
        total_balance,
    });

    Ok(total_balance)
}
