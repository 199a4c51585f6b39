use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::VaultLedger;

/**
 * Account context for the owner transfer override
 *
 * Moves tokens out of the pool to any recipient, bypassing entitlement and
 * vesting. Payee released amounts are not updated.
 *
 * Access Control: Owner only (checked by PaymentPool::admin_transfer, so a
 * renounced pool rejects everyone)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AdminTransfer<'info> {
    #[account(
        seeds = [POOL_SEED.as_bytes(), pool.payment_token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, PaymentPool>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Recipient's token account; its token-account owner is the recipient
    #[account(
        mut,
        token::mint = pool.payment_token_mint,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mint::token_program = token_program,
        constraint = token_mint.key() == pool.payment_token_mint @ PaymentPoolError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Executes an owner transfer out of the pool
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of tokens to move to the recipient
 */
pub fn handle_admin_transfer(ctx: Context<AdminTransfer>, amount: u64) -> Result<()> {
    let pool_key = ctx.accounts.pool.key();
    let owner = ctx.accounts.owner.key();
    let recipient = ctx.accounts.recipient_token_account.owner;

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
        destination: ctx.accounts.recipient_token_account.to_account_info(),
        destination_owner: recipient,
        mint: ctx.accounts.token_mint.to_account_info(),
        decimals: ctx.accounts.token_mint.decimals,
        authority: ctx.accounts.pool.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
        signer_seeds: signer,
    };

    ctx.accounts
        .pool
        .admin_transfer(&mut ledger, &owner, &recipient, amount)?;

    emit_cpi!(AdminTransferExecuted {
        pool: pool_key,
        owner,
        recipient,
        amount,
    });

    Ok(())
}
