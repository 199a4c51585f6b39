use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::VaultLedger;

/**
 * Account context for claiming vested tokens
 *
 * A registered payee withdraws part of its vested, proportional share of
 * everything the pool has ever held.
 *
 * Access Control: Any registered payee, for itself only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The pool account
    /// - Will be modified to update the payee's released amount
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.payment_token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, PaymentPool>,

    /// Token vault holding the pool's payment tokens
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account to receive the tokens
    #[account(
        mut,
        token::mint = pool.payment_token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The payment token mint
    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == pool.payment_token_mint @ PaymentPoolError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The payee claiming tokens
    pub claimant: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens to withdraw
 *
 * Validation order (NoShares, LockupActive, InvalidAmount, ExceedsTotalAssets,
 * ExceedsClaimable) is enforced by PaymentPool::claim.
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let pool_key = ctx.accounts.pool.key();
    let claimant = ctx.accounts.claimant.key();

    // Pool PDA signs for the vault
    let mint_key = ctx.accounts.pool.payment_token_mint;
    let creator_key = ctx.accounts.pool.creator;
    let bump = [ctx.accounts.pool.bump];
    let seeds: &[&[u8]] = &[
        POOL_SEED.as_bytes(),
        mint_key.as_ref(),
        creator_key.as_ref(),
        &bump,
    ];
    let signer = &[seeds];

    let mut ledger = VaultLedger {
        vault: ctx.accounts.token_vault.to_account_info(),
        vault_amount: ctx.accounts.token_vault.amount,
        destination: ctx.accounts.claimant_token_account.to_account_info(),
        destination_owner: ctx.accounts.claimant_token_account.owner,
        mint: ctx.accounts.token_mint.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        authority: ctx.accounts.pool.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    let released = ctx.accounts.pool.claim(&mut ledger, &claimant, amount, now)?;

    emit_cpi!(TokensClaimed {
        pool: pool_key,
        payee: claimant,
        amount,
        released,
    });

    Ok(())
}
