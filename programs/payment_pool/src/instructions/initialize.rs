use crate::constants::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for initializing a payment pool
 *
 * Creates (if needed) the pool PDA and its token vault, then registers the
 * payees, their shares and the vesting parameters. Both accounts use
 * init_if_needed so that a repeated call reaches the handler and is rejected
 * with AlreadyInitialized instead of a system-program error.
 *
 * Access Control: The signer becomes creator and owner of the pool
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The pool account (PDA)
    /// - Stores the payee registry and vesting parameters
    /// - Derived from: ["payment_pool", token_mint, owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = PaymentPool::LEN,
        seeds = [POOL_SEED.as_bytes(), token_mint.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, PaymentPool>,

    /// Token vault (PDA) holding the pool's payment tokens
    /// - Token authority is the pool PDA
    /// - Derived from: ["vault", pool_key]
    #[account(
        init_if_needed,
        token::mint = token_mint,
        token::authority = pool,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Mint of the token this pool disburses
    #[account(mint::token_program = token_program)]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The initializing signer, recorded as creator and owner
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,
}

/**
 * Initializes the pool
 *
 * @param ctx - The account context containing all required accounts
 * @param payees - Payee wallets, in registry order
 * @param shares - Share weight for each payee, same order as payees
 * @param release_time - Unix timestamp at which the lock-up ends
 * @param vesting_months - Length of the linear vesting ramp
 */
pub fn handle_initialize(
    ctx: Context<InitializePool>,
    payees: Vec<Pubkey>,
    shares: Vec<u64>,
    release_time: i64,
    vesting_months: u16,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let token_mint = ctx.accounts.token_mint.key();
    let token_vault = ctx.accounts.token_vault.key();

    let pool = &mut ctx.accounts.pool;
    pool.initialize(
        owner,
        token_mint,
        token_vault,
        &payees,
        &shares,
        release_time,
        vesting_months,
    )?;
    pool.bump = ctx.bumps.pool;

    let pool_key = pool.key();
    let total_shares = pool.total_shares;

    emit_cpi!(PoolInitialized {
        pool: pool_key,
        owner,
        payment_token_mint: token_mint,
        token_vault,
        payee_count: payees.len() as u8,
        total_shares,
        release_time,
        vesting_months,
    });

    Ok(())
}
