use anchor_lang::prelude::*;

declare_id!("6pUpZbGV4aTyVcJ5sHk1bKdyWhwM2D6JnrwJcbpEHGXP");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Payment Pool Program
 *
 * A share-based, time-vested payment pool for a single SPL token. A fixed set
 * of payees, each holding an integer share weight, withdraw portions of the
 * pool's balance subject to a lock-up and a linear vesting ramp.
 *
 * Key Features:
 * - Entitlement = floor(total_ever_held * shares / total_shares), where
 *   total_ever_held is the vault balance plus everything already claimed
 * - Tokens sent to the vault at any time are shared out proportionally
 * - Lock-up until release_time, then whole-day linear vesting over the
 *   configured number of months
 * - Owner transfer override that bypasses entitlement and vesting
 * - Ownership transfer and renouncement (renounced pools have no owner)
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Pool PDA: Payee registry, released amounts and vesting parameters
 * - Token Vault PDA: Holds the payment tokens, owned by the pool PDA
 * - Accounting engine (`ledger`): pure operations over the pool record
 *
 * Workflow:
 * 1. Owner initializes the pool with payees, shares and vesting parameters
 * 2. Anyone funds the vault with the payment token
 * 3. After release_time, payees claim vested amounts
 * 4. The owner may move tokens out directly, or hand off / renounce ownership
 */
#[program]
pub mod payment_pool {
    use super::*;

    /**
     * Initializes a payment pool
     *
     * @param ctx - Account context containing pool, vault, mint and owner accounts
     * @param payees - Payee wallets
     * @param shares - Share weight for each payee, same order as payees
     * @param release_time - Unix timestamp at which the lock-up ends
     * @param vesting_months - Length of the vesting ramp in months
     *
     * Access Control: Signer becomes owner; runs once per pool
     */
    pub fn initialize(
        ctx: Context<InitializePool>,
        payees: Vec<Pubkey>,
        shares: Vec<u64>,
        release_time: i64,
        vesting_months: u16,
    ) -> Result<()> {
        handle_initialize(ctx, payees, shares, release_time, vesting_months)
    }

    /**
     * Claims vested tokens
     *
     * @param ctx - Account context containing pool, vault and claimant accounts
     * @param amount - Amount to withdraw
     *
     * Access Control: Registered payees
     */
    pub fn claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
        handle_claim(ctx, amount)
    }

    /**
     * Returns the amount the payee can claim now
     *
     * Access Control: Anyone (read-only)
     * Note: Fails with LockupActive before release_time
     */
    pub fn claimable_amount(ctx: Context<QuoteBalance>) -> Result<u64> {
        handle_claimable_amount(ctx)
    }

    /**
     * Returns the unclaimed part of the payee's proportional share
     *
     * Access Control: Anyone (read-only)
     */
    pub fn total_balance(ctx: Context<QuoteBalance>) -> Result<u64> {
        handle_total_balance(ctx)
    }

    /**
     * Transfers tokens out of the pool, bypassing vesting
     *
     * @param ctx - Account context containing pool, vault and recipient accounts
     * @param amount - Amount to transfer
     *
     * Access Control: Owner only
     * Note: Does not update any payee's released amount
     */
    pub fn admin_transfer(ctx: Context<AdminTransfer>, amount: u64) -> Result<()> {
        handle_admin_transfer(ctx, amount)
    }

    /**
     * Transfers ownership of the pool
     *
     * Access Control: Owner only
     */
    pub fn transfer_ownership(ctx: Context<UpdateOwner>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }

    /**
     * Renounces ownership of the pool
     *
     * Access Control: Owner only
     * Note: Irreversible; owner-only instructions reject every signer afterwards
     */
    pub fn renounce_ownership(ctx: Context<UpdateOwner>) -> Result<()> {
        handle_renounce_ownership(ctx)
    }
}
